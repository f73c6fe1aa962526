//! Register map of the LWZ family (LWZ x04/x03 SOL ventilation heat pumps and the older LWA).

use super::{
    Capabilities, Derivation, Entry, RegisterId, RegisterKind, S10, S100, Section, SplitHighLow, UA,
    UB, VirtualRegister, bit,
};

/// Values accepted by the LWZ `OPERATING_MODE` parameter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, num_derive::FromPrimitive, strum::Display, strum::VariantArray,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum LwzOperatingMode {
    Emergency = 0,
    Standby = 1,
    Day = 3,
    Setback = 4,
    Dhw = 5,
    Automatic = 11,
    Manual = 14,
}

const OPERATING_MODES: &[u16] = &[
    LwzOperatingMode::Emergency as u16,
    LwzOperatingMode::Standby as u16,
    LwzOperatingMode::Day as u16,
    LwzOperatingMode::Setback as u16,
    LwzOperatingMode::Dhw as u16,
    LwzOperatingMode::Automatic as u16,
    LwzOperatingMode::Manual as u16,
];

pub(super) const CAPABILITIES: Capabilities = Capabilities { reset: None };

pub(super) static SECTIONS: &[Section] = &[
    Section {
        name: "System Values",
        kind: RegisterKind::Input,
        registers: registers! {
            ActualRoomTemperatureHk1: 1, S10, "°C", "ACTUAL ROOM T HC1", min = -20.0, max = 60.0;
            SetRoomTemperatureHk1: 2, S10, "°C", "SET ROOM TEMPERATURE HC1", min = -20.0, max = 60.0;
            RelativeHumidityHk1: 3, S10, "%", "RELATIVE HUMIDITY HC1", min = 0.0, max = 100.0;
            ActualRoomTemperatureHk2: 4, S10, "°C", "ACTUAL ROOM T HC2", min = -20.0, max = 60.0;
            SetRoomTemperatureHk2: 5, S10, "°C", "SET ROOM TEMPERATURE HC2", min = -20.0, max = 60.0;
            RelativeHumidityHk2: 6, S10, "%", "RELATIVE HUMIDITY HC2", min = 0.0, max = 100.0;
            OutsideTemperature: 7, S10, "°C", "OUTSIDE TEMPERATURE", min = -60.0, max = 80.0;
            ActualTemperatureHk1: 8, S10, "°C", "ACTUAL VALUE HC1", min = 0.0, max = 90.0;
            SetTemperatureHk1: 9, S10, "°C", "SET VALUE HC1", min = 0.0, max = 65.0;
            ActualTemperatureHk2: 10, S10, "°C", "ACTUAL VALUE HC2", min = 0.0, max = 90.0;
            SetTemperatureHk2: 11, S10, "°C", "SET VALUE HC2", min = 0.0, max = 65.0;
            ActualFlowTemperature: 12, S10, "°C", "FLOW TEMPERATURE", min = 0.0, max = 90.0;
            ActualReturnTemperature: 13, S10, "°C", "RETURN TEMPERATURE", min = 0.0, max = 90.0;
            HeatingPressure: 14, S10, "bar", "PRESSURE HTG CIRC", min = 0.0, max = 6.0;
            FlowRate: 15, S10, "l/min", "FLOW RATE";
            ActualTemperatureDhw: 16, S10, "°C", "ACTUAL DHW T", min = 10.0, max = 65.0;
            SetTemperatureDhw: 17, S10, "°C", "DHW SET TEMPERATURE", min = 10.0, max = 65.0;
            VentilationAirActualFanSpeed: 18, UA, "Hz", "VENTILATION AIR ACTUAL FAN SPEED", min = 0.0, max = 100.0;
            VentilationAirSetFlowRate: 19, UA, "m³/h", "VENTILATION AIR SET FLOW RATE", min = 0.0, max = 300.0;
            ExtractAirActualFanSpeed: 20, UA, "Hz", "EXTRACT AIR ACTUAL FAN SPEED", min = 0.0, max = 100.0;
            ExtractAirSetFlowRate: 21, UA, "m³/h", "EXTRACT AIR SET FLOW RATE", min = 0.0, max = 300.0;
            ExtractAirHumidity: 22, UA, "%", "EXTRACT AIR HUMIDITY", min = 0.0, max = 100.0;
            ExtractAirTemperature: 23, S10, "°C", "EXTRACT AIR TEMP", min = 0.0, max = 65535.0;
            ExtractAirDewPoint: 24, S10, "°C", "EXTRACT AIR DEW POINT", min = 0.0, max = 65535.0;
            DewPointTemperatureHk1: 25, S10, "°C", "DEW POINT TEMP HC1", min = -40.0, max = 30.0;
            DewPointTemperatureHk2: 26, S10, "°C", "DEW POINT TEMP HC2", min = -40.0, max = 30.0;
            CollectorTemperature: 27, S10, "°C", "COLLECTOR TEMPERATURE", min = -60.0, max = 200.0;
            HotGasTemperature: 28, S10, "°C", "HOT GAS TEMPERATURE", min = 0.0, max = 140.0;
            HighPressure: 29, S100, "bar", "HIGH PRESSURE", min = 0.0, max = 50.0;
            LowPressure: 30, S100, "bar", "LOW PRESSURE", min = 0.0, max = 25.0;
            CompressorStartsHigh: 31, UA, "", "COMPRESSOR STARTS", min = 0.0, max = 65535.0;
            CompressorSpeed: 32, S10, "Hz", "COMPRESSOR SPEED", min = 0.0, max = 240.0;
            MixedWaterAmount: 33, UA, "l", "MIXED WATER AMOUNT", min = 0.0, max = 65535.0;
            CompressorStartsLow: 34, UA, "", "COMPRESSOR STARTS", min = 0.0, max = 65535.0;
        },
    },
    Section {
        name: "System Parameters",
        kind: RegisterKind::Holding,
        registers: registers! {
            OperatingMode: 1001, UB, "", "OPERATING MODE", min = 0.0, max = 14.0, choices = OPERATING_MODES;
            RoomTemperatureDayHk1: 1002, S10, "°C", "ROOM TEMPERATURE DAY", min = 10.0, max = 30.0;
            RoomTemperatureNightHk1: 1003, S10, "°C", "ROOM TEMPERATURE NIGHT", min = 10.0, max = 30.0;
            ManualSetTemperatureHk1: 1004, S10, "°C", "MANUAL HC SET", min = 10.0, max = 65.0;
            RoomTemperatureDayHk2: 1005, S10, "°C", "ROOM TEMPERATURE DAY", min = 10.0, max = 30.0;
            RoomTemperatureNightHk2: 1006, S10, "°C", "ROOM TEMPERATURE NIGHT", min = 10.0, max = 30.0;
            ManualSetTemperatureHk2: 1007, S10, "°C", "MANUAL HC SET", min = 10.0, max = 65.0;
            GradientHk1: 1008, S100, "", "GRADIENT", min = 0.0, max = 5.0;
            LowEndHk1: 1009, S10, "°C", "LOW END", min = 0.0, max = 20.0;
            GradientHk2: 1010, S100, "", "GRADIENT", min = 0.0, max = 5.0;
            LowEndHk2: 1011, S10, "°C", "LOW END", min = 0.0, max = 20.0;
            DhwSetDay: 1012, S10, "°C", "DHW SET DAY", min = 10.0, max = 55.0;
            DhwSetNight: 1013, S10, "°C", "DHW SET NIGHT", min = 10.0, max = 55.0;
            DhwSetManual: 1014, S10, "°C", "DHW SET MANUAL", min = 10.0, max = 65.0;
            MixedWaterSetDay: 1015, UA, "l", "MWM SET DAY", min = 50.0, max = 288.0;
            MixedWaterSetNight: 1016, UA, "l", "MWM SET NIGHT", min = 50.0, max = 288.0;
            MixedWaterSetManual: 1017, UA, "l", "MWM SET MANUAL", min = 50.0, max = 288.0;
            FanStageDay: 1018, UA, "", "DAY STAGE", min = 0.0, max = 3.0;
            FanStageNight: 1019, UA, "", "NIGHT STAGE", min = 0.0, max = 3.0;
            FanStageParty: 1020, UA, "", "PARTY STAGE", min = 0.0, max = 3.0;
            FanStageManual: 1021, UA, "", "MANUAL STAGE", min = 0.0, max = 3.0;
            CoolingRoomTemperatureDayHk1: 1022, S10, "°C", "ROOM TEMPERATURE DAY", min = 10.0, max = 30.0;
            CoolingRoomTemperatureNightHk1: 1023, S10, "°C", "ROOM TEMPERATURE NIGHT", min = 10.0, max = 30.0;
            CoolingRoomTemperatureDayHk2: 1024, S10, "°C", "ROOM TEMPERATURE DAY", min = 10.0, max = 30.0;
            CoolingRoomTemperatureNightHk2: 1025, S10, "°C", "ROOM TEMPERATURE NIGHT", min = 10.0, max = 30.0;
            Reset: 1026, UA, "", "RESET", min = 0.0, max = 1.0;
            RestartIsg: 1027, UA, "", "RESTART ISG", min = 0.0, max = 2.0;
        },
    },
    Section {
        name: "System State",
        kind: RegisterKind::Input,
        registers: registers! {
            OperatingStatus: 2001, UA, "", "OPERATING STATUS", min = 0.0, max = 65535.0;
            SwitchingProgramEnabled: 2001, bit(0), "", "SWITCHING PROGRAM ENABLED";
            CompressorOn: 2001, bit(1), "", "COMPRESSOR ON";
            IsHeating: 2001, bit(2), "", "IS HEATING";
            IsCooling: 2001, bit(3), "", "IS COOLING";
            IsHeatingWater: 2001, bit(4), "", "IS HEATING WATER";
            ElectricReheating: 2001, bit(5), "", "ELECTRIC REHEATING ON";
            Service: 2001, bit(6), "", "SERVICE";
            PowerOff: 2001, bit(7), "", "POWER OFF";
            Filter: 2001, bit(8), "", "FILTER";
            Ventilation: 2001, bit(9), "", "VENTILATION";
            PumpOnHk1: 2001, bit(10), "", "HEATING CIRCUIT PUMP";
            EvaporatorDefrost: 2001, bit(11), "", "EVAPORATOR DEFROST";
            FilterExtractAir: 2001, bit(12), "", "FILTER EXTRACT AIR";
            FilterVentilationAir: 2001, bit(13), "", "FILTER VENTILATION AIR";
            HeatUpProgram: 2001, bit(14), "", "HEAT UP PROGRAM";
            FaultStatus: 2002, UA, "", "FAULT STATUS", min = 0.0, max = 1.0;
            BusStatus: 2003, UA, "", "BUS STATUS", min = -4.0, max = 0.0;
            DefrostInitiated: 2004, UA, "", "DEFROST INITIATED", min = 0.0, max = 1.0;
            OperatingStatus2: 2005, UA, "", "OPERATING STATUS 2", min = 0.0, max = 65535.0;
            IsSummerMode: 2005, bit(0), "", "IS SUMMER MODE";
        },
    },
    Section {
        name: "Energy Data",
        kind: RegisterKind::Input,
        registers: registers! {
            ProducedHeatingToday: 3001, UA, "kWh", "HEAT METER HTG DAY", min = 0.0, max = 65535.0;
            ProducedHeatingTotalLow: 3002, UA, "kWh", "HEAT METER HTG TTL", min = 0.0, max = 999.0;
            ProducedHeatingTotalHigh: 3003, UA, "MWh", "HEAT METER HTG TTL", min = 0.0, max = 65535.0;
            ProducedWaterHeatingToday: 3004, UA, "kWh", "HEAT METER DHW DAY", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTotalLow: 3005, UA, "kWh", "HEAT METER DHW TTL", min = 0.0, max = 999.0;
            ProducedWaterHeatingTotalHigh: 3006, UA, "MWh", "HEAT METER DHW TTL", min = 0.0, max = 65535.0;
            ProducedBoosterHeatingTotalLow: 3007, UA, "kWh", "HEAT M BOOST HTG TTL", min = 0.0, max = 999.0;
            ProducedBoosterHeatingTotalHigh: 3008, UA, "MWh", "HEAT M BOOST HTG TTL", min = 0.0, max = 65535.0;
            ProducedBoosterWaterHeatingTotalLow: 3009, UA, "kWh", "HEAT M BOOST DHW TTL", min = 0.0, max = 999.0;
            ProducedBoosterWaterHeatingTotalHigh: 3010, UA, "MWh", "HEAT M BOOST DHW", min = 0.0, max = 65535.0;
            ProducedRecoveryToday: 3011, UA, "kWh", "HEAT M RECOVERY DAY", min = 0.0, max = 65535.0;
            ProducedRecoveryTotalLow: 3012, UA, "kWh", "HEAT M RECOVERY TTL", min = 0.0, max = 999.0;
            ProducedRecoveryTotalHigh: 3013, UA, "MWh", "HEAT M RECOVERY TTL", min = 0.0, max = 65535.0;
            ProducedSolarHeatingToday: 3014, UA, "kWh", "HM SOLAR HTG DAY", min = 0.0, max = 65535.0;
            ProducedSolarHeatingTotalLow: 3015, UA, "kWh", "HM SOLAR HTG TOTAL", min = 0.0, max = 999.0;
            ProducedSolarHeatingTotalHigh: 3016, UA, "MWh", "HM SOLAR HTG TOTAL", min = 0.0, max = 65535.0;
            ProducedSolarWaterHeatingToday: 3017, UA, "kWh", "HM SOLAR DHW DAY", min = 0.0, max = 65535.0;
            ProducedSolarWaterHeatingTotalLow: 3018, UA, "kWh", "HM SOLAR DWH TOTAL", min = 0.0, max = 999.0;
            ProducedSolarWaterHeatingTotalHigh: 3019, UA, "MWh", "HM SOLAR DWH TOTAL", min = 0.0, max = 65535.0;
            ProducedCoolingTotalLow: 3020, UA, "kWh", "HM COOLING TOTAL", min = 0.0, max = 999.0;
            ProducedCoolingTotalHigh: 3021, UA, "MWh", "HM COOLING TOTAL", min = 0.0, max = 65535.0;
            ConsumedHeatingToday: 3022, UA, "kWh", "PWR CON HTG DAY", min = 0.0, max = 65535.0;
            ConsumedHeatingTotalLow: 3023, UA, "kWh", "PWR CON HTG TTL", min = 0.0, max = 999.0;
            ConsumedHeatingTotalHigh: 3024, UA, "MWh", "PWR CON HTG TTL", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingToday: 3025, UA, "kWh", "PWR CON DHW DAY", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTotalLow: 3026, UA, "kWh", "PWR CON DHW TTL", min = 0.0, max = 999.0;
            ConsumedWaterHeatingTotalHigh: 3027, UA, "MWh", "PWR CON DHW TTL", min = 0.0, max = 65535.0;
            CompressorHeatingHours: 3028, UA, "h", "COMPRESSOR HEATING", min = 0.0, max = 65535.0;
            CompressorCoolingHours: 3029, UA, "h", "COMPRESSOR COOLING", min = 0.0, max = 65535.0;
            CompressorWaterHeatingHours: 3030, UA, "h", "COMPRESSOR DHW", min = 0.0, max = 65535.0;
            BoosterHeatingHours: 3031, UA, "h", "ELEC BOOSTER HEATING", min = 0.0, max = 65535.0;
            BoosterWaterHeatingHours: 3032, UA, "h", "ELEC BOOSTER DHW", min = 0.0, max = 65535.0;
        },
    },
];

pub(super) static VIRTUALS: &[VirtualRegister] = virtuals! {
    ProducedHeatingTotal = split(ProducedHeatingTotalLow, ProducedHeatingTotalHigh), "kWh";
    ProducedHeatingLifetime = lifetime(ProducedHeatingToday, ProducedHeatingTotalLow, ProducedHeatingTotalHigh), "kWh";
    ProducedWaterHeatingTotal = split(ProducedWaterHeatingTotalLow, ProducedWaterHeatingTotalHigh), "kWh";
    ProducedWaterHeatingLifetime = lifetime(ProducedWaterHeatingToday, ProducedWaterHeatingTotalLow, ProducedWaterHeatingTotalHigh), "kWh";
    ProducedBoosterHeatingTotal = split(ProducedBoosterHeatingTotalLow, ProducedBoosterHeatingTotalHigh), "kWh";
    ProducedBoosterWaterHeatingTotal = split(ProducedBoosterWaterHeatingTotalLow, ProducedBoosterWaterHeatingTotalHigh), "kWh";
    ProducedRecoveryTotal = split(ProducedRecoveryTotalLow, ProducedRecoveryTotalHigh), "kWh";
    ProducedRecoveryLifetime = lifetime(ProducedRecoveryToday, ProducedRecoveryTotalLow, ProducedRecoveryTotalHigh), "kWh";
    ProducedSolarHeatingTotal = split(ProducedSolarHeatingTotalLow, ProducedSolarHeatingTotalHigh), "kWh";
    ProducedSolarHeatingLifetime = lifetime(ProducedSolarHeatingToday, ProducedSolarHeatingTotalLow, ProducedSolarHeatingTotalHigh), "kWh";
    ProducedSolarWaterHeatingTotal = split(ProducedSolarWaterHeatingTotalLow, ProducedSolarWaterHeatingTotalHigh), "kWh";
    ProducedSolarWaterHeatingLifetime = lifetime(ProducedSolarWaterHeatingToday, ProducedSolarWaterHeatingTotalLow, ProducedSolarWaterHeatingTotalHigh), "kWh";
    ProducedCoolingTotal = split(ProducedCoolingTotalLow, ProducedCoolingTotalHigh), "kWh";
    ConsumedHeatingTotal = split(ConsumedHeatingTotalLow, ConsumedHeatingTotalHigh), "kWh";
    ConsumedHeatingLifetime = lifetime(ConsumedHeatingToday, ConsumedHeatingTotalLow, ConsumedHeatingTotalHigh), "kWh";
    ConsumedWaterHeatingTotal = split(ConsumedWaterHeatingTotalLow, ConsumedWaterHeatingTotalHigh), "kWh";
    ConsumedWaterHeatingLifetime = lifetime(ConsumedWaterHeatingToday, ConsumedWaterHeatingTotalLow, ConsumedWaterHeatingTotalHigh), "kWh";
    CompressorStarts = split(CompressorStartsLow, CompressorStartsHigh), "";
};

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive as _;
    use strum::VariantArray as _;

    #[test]
    fn operating_modes_match_enumeration() {
        assert_eq!(OPERATING_MODES.len(), LwzOperatingMode::VARIANTS.len());
        for &mode in OPERATING_MODES {
            assert!(LwzOperatingMode::from_u16(mode).is_some(), "{mode}");
        }
        assert_eq!(LwzOperatingMode::from_u16(2), None);
        assert_eq!(LwzOperatingMode::Automatic.to_string(), "AUTOMATIC");
    }
}
