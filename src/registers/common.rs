//! Registers every ISG exposes regardless of the controller family behind it.

use super::{Entry, IDENTIFICATION_ADDRESS, RegisterId, RegisterKind, Section, UA};

pub(super) static SECTIONS: &[Section] = &[
    Section {
        name: "Energy Management Settings",
        kind: RegisterKind::Holding,
        registers: registers! {
            SgReadyActive: 4001, UA, "", "SWITCH SG READY ON AND OFF", min = 0.0, max = 1.0;
            SgReadyInput1: 4002, UA, "", "SG READY INPUT 1", min = 0.0, max = 1.0;
            SgReadyInput2: 4003, UA, "", "SG READY INPUT 2", min = 0.0, max = 1.0;
        },
    },
    Section {
        name: "Energy System Information",
        kind: RegisterKind::Input,
        registers: registers! {
            SgReadyOperatingState: 5001, UA, "", "SG READY OPERATING STATE", min = 1.0, max = 4.0;
            ControllerIdentification: IDENTIFICATION_ADDRESS, UA, "", "CONTROLLER IDENTIFICATION";
        },
    },
];
