//! Register catalogs of the ISG Modbus interface.
//!
//! The two controller families expose overlapping but incompatible register maps. Each family
//! gets one immutable [`RegisterCatalog`], built on first use and shared for the rest of the
//! process. Register definitions live as tables in the family modules and are expanded by the
//! `registers!` and `virtuals!` macros below.

use crate::blocks::{self, RegisterBlock};
use crate::codec::{self, Encoding, EncodingError, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Convenience aliases for the nicely tabulated register definitions in the family modules.
const S10: Encoding = Encoding::SignedTenths;
const S100: Encoding = Encoding::SignedHundredths;
const UA: Encoding = Encoding::UnsignedRawA;
const UB: Encoding = Encoding::UnsignedRawB;
const fn bit(bit: u8) -> Encoding {
    Encoding::BitFlags { bit }
}

/// The controller identification word, present at the same place in every family.
pub const IDENTIFICATION_ADDRESS: u16 = 5002;
pub const IDENTIFICATION_KIND: RegisterKind = RegisterKind::Input;
pub const IDENTIFICATION_ENCODING: Encoding = UA;

macro_rules! optional {
    () => {
        None
    };
    ($($lit: tt)+) => {
        Some($($lit)*)
    };
}

macro_rules! registers {
    ($($id: ident: $address: expr, $encoding: expr, $unit: literal, $name: literal
       $(, min = $min: literal, max = $max: literal)? $(, choices = $choices: expr)?;)+) => {
        &[$(Entry {
            id: RegisterId::$id,
            address: $address,
            encoding: $encoding,
            unit: $unit,
            name: $name,
            min: optional!($($min)?),
            max: optional!($($max)?),
            choices: optional!($($choices)?),
        }),+]
    };
}

macro_rules! virtuals {
    (@derive split($low: ident, $high: ident)) => {
        Derivation::SplitHighLow(SplitHighLow {
            low: RegisterId::$low,
            high: RegisterId::$high,
        })
    };
    (@derive lifetime($day: ident, $low: ident, $high: ident)) => {
        Derivation::DayPlusTotal {
            day: RegisterId::$day,
            total: SplitHighLow {
                low: RegisterId::$low,
                high: RegisterId::$high,
            },
        }
    };
    ($($id: ident = $rule: ident($($source: ident),+), $unit: literal;)+) => {
        &[$({
            let derivation = virtuals!(@derive $rule($($source),+));
            VirtualRegister {
                id: RegisterId::$id,
                monotonic: derivation.is_cumulative(),
                derivation,
                unit: $unit,
            }
        }),+]
    };
}

mod common;
pub mod lwz;
mod wpm;

/// Symbolic name of a physical or derived register.
///
/// The same identifier is used by both families wherever the registers mean the same thing, even
/// if they live at different addresses.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RegisterId {
    // Telemetry
    ActualTemperatureFe7,
    SetTemperatureFe7,
    ActualTemperatureFek,
    SetTemperatureFek,
    RelativeHumidity,
    DewPointTemperature,
    OutsideTemperature,
    ActualTemperatureHk1,
    SetTemperatureHk1Wpm3i,
    SetTemperatureHk1,
    ActualTemperatureHk2,
    SetTemperatureHk2,
    ActualFlowTemperatureHeatPump,
    ActualFlowTemperatureBooster,
    ActualFlowTemperature,
    ActualReturnTemperature,
    SetFixedTemperature,
    ActualBufferTemperature,
    SetBufferTemperature,
    HeatingPressure,
    FlowRate,
    ActualTemperatureDhw,
    SetTemperatureDhw,
    ActualTemperatureFan,
    SetTemperatureFan,
    ActualTemperatureArea,
    SetTemperatureArea,
    CollectorTemperature,
    CylinderTemperature,
    Runtime,
    ActualTemperatureExternal,
    SetTemperatureExternal,
    ApplicationLimitHeating,
    ApplicationLimitDhw,
    RuntimeExternalHeatSource,
    SourceTemperature,
    MinSourceTemperature,
    SourcePressure,
    HotGasTemperature,
    HighPressure,
    LowPressure,
    ReturnTemperatureHp1,
    FlowTemperatureHp1,
    HotGasTemperatureHp1,
    LowPressureHp1,
    MeanPressureHp1,
    HighPressureHp1,
    WaterFlowRateHp1,
    ReturnTemperatureHp2,
    FlowTemperatureHp2,
    HotGasTemperatureHp2,
    LowPressureHp2,
    MeanPressureHp2,
    HighPressureHp2,
    WaterFlowRateHp2,
    ReturnTemperatureHp3,
    FlowTemperatureHp3,
    HotGasTemperatureHp3,
    LowPressureHp3,
    MeanPressureHp3,
    HighPressureHp3,
    WaterFlowRateHp3,
    ReturnTemperatureHp4,
    FlowTemperatureHp4,
    HotGasTemperatureHp4,
    LowPressureHp4,
    MeanPressureHp4,
    HighPressureHp4,
    WaterFlowRateHp4,
    ReturnTemperatureHp5,
    FlowTemperatureHp5,
    HotGasTemperatureHp5,
    LowPressureHp5,
    MeanPressureHp5,
    HighPressureHp5,
    WaterFlowRateHp5,
    ReturnTemperatureHp6,
    FlowTemperatureHp6,
    HotGasTemperatureHp6,
    LowPressureHp6,
    MeanPressureHp6,
    HighPressureHp6,
    WaterFlowRateHp6,
    ActualRoomTemperatureHk1,
    SetRoomTemperatureHk1,
    RelativeHumidityHk1,
    DewPointTemperatureHk1,
    ActualRoomTemperatureHk2,
    SetRoomTemperatureHk2,
    RelativeHumidityHk2,
    DewPointTemperatureHk2,
    ActualRoomTemperatureHk3,
    SetRoomTemperatureHk3,
    RelativeHumidityHk3,
    DewPointTemperatureHk3,
    ActualRoomTemperatureHk4,
    SetRoomTemperatureHk4,
    RelativeHumidityHk4,
    DewPointTemperatureHk4,
    ActualRoomTemperatureHk5,
    SetRoomTemperatureHk5,
    RelativeHumidityHk5,
    DewPointTemperatureHk5,
    SetRoomTemperatureCoolingHk1,
    SetRoomTemperatureCoolingHk2,
    SetRoomTemperatureCoolingHk3,
    SetRoomTemperatureCoolingHk4,
    SetRoomTemperatureCoolingHk5,
    ActualTemperatureHk3,
    SetTemperatureHk3,
    VentilationAirActualFanSpeed,
    VentilationAirSetFlowRate,
    ExtractAirActualFanSpeed,
    ExtractAirSetFlowRate,
    ExtractAirHumidity,
    ExtractAirTemperature,
    ExtractAirDewPoint,
    CompressorStartsHigh,
    CompressorSpeed,
    MixedWaterAmount,
    CompressorStartsLow,
    // Parameters and commands
    OperatingMode,
    ComfortTemperatureHk1,
    EcoTemperatureHk1,
    HeatingCurveRiseHk1,
    ComfortTemperatureHk2,
    EcoTemperatureHk2,
    HeatingCurveRiseHk2,
    FixedValueOperation,
    DualModeTemperatureHeating,
    ComfortTemperatureDhw,
    EcoTemperatureDhw,
    DhwStages,
    DualModeTemperatureDhw,
    SetFlowTemperatureArea,
    FlowTemperatureHysteresisArea,
    SetRoomTemperatureArea,
    SetFlowTemperatureFan,
    FlowTemperatureHysteresisFan,
    SetRoomTemperatureFan,
    Reset,
    RestartIsg,
    ComfortTemperatureHk3,
    EcoTemperatureHk3,
    HeatingCurveRiseHk3,
    RoomTemperatureDayHk1,
    RoomTemperatureNightHk1,
    ManualSetTemperatureHk1,
    RoomTemperatureDayHk2,
    RoomTemperatureNightHk2,
    ManualSetTemperatureHk2,
    GradientHk1,
    LowEndHk1,
    GradientHk2,
    LowEndHk2,
    DhwSetDay,
    DhwSetNight,
    DhwSetManual,
    MixedWaterSetDay,
    MixedWaterSetNight,
    MixedWaterSetManual,
    FanStageDay,
    FanStageNight,
    FanStageParty,
    FanStageManual,
    CoolingRoomTemperatureDayHk1,
    CoolingRoomTemperatureNightHk1,
    CoolingRoomTemperatureDayHk2,
    CoolingRoomTemperatureNightHk2,
    // Operating state and status flags
    OperatingStatus,
    PumpOnHk1,
    PumpOnHk2,
    HeatUpProgram,
    BoosterStagesRunning,
    IsHeating,
    IsHeatingWater,
    CompressorOn,
    IsSummerMode,
    IsCooling,
    PowerOff,
    OperatingStatusWpm3,
    FaultStatus,
    BusStatus,
    DefrostInitiated,
    ActiveError,
    MessageNumber,
    HeatingCircuitPump1,
    HeatingCircuitPump2,
    HeatingCircuitPump3,
    BufferChargingPump1,
    BufferChargingPump2,
    DhwChargingPump,
    SourcePump,
    FaultOutput,
    DhwCirculationPump,
    SecondHeatGeneratorDhw,
    SecondHeatGeneratorHeating,
    CoolingMode,
    MixerOpenHk2,
    MixerCloseHk2,
    MixerOpenHk3,
    MixerCloseHk3,
    BoosterStage1,
    BoosterStage2,
    BoosterStage12,
    HeatingCircuitPump4,
    HeatingCircuitPump5,
    BufferChargingPump3,
    BufferChargingPump4,
    BufferChargingPump5,
    BufferChargingPump6,
    DiffControllerPump1,
    DiffControllerPump2,
    PoolPumpPrimary,
    PoolPumpSecondary,
    MixerOpenHk4,
    MixerCloseHk4,
    MixerOpenHk5,
    MixerCloseHk5,
    Compressor1,
    Compressor2,
    Compressor3,
    Compressor4,
    Compressor5,
    Compressor6,
    SwitchingProgramEnabled,
    ElectricReheating,
    Service,
    Filter,
    Ventilation,
    EvaporatorDefrost,
    FilterExtractAir,
    FilterVentilationAir,
    OperatingStatus2,
    // Energy and runtime counters
    ProducedHeatingToday,
    ProducedHeatingTotalLow,
    ProducedHeatingTotalHigh,
    ProducedWaterHeatingToday,
    ProducedWaterHeatingTotalLow,
    ProducedWaterHeatingTotalHigh,
    ProducedBoosterHeatingTotalLow,
    ProducedBoosterHeatingTotalHigh,
    ProducedBoosterWaterHeatingTotalLow,
    ProducedBoosterWaterHeatingTotalHigh,
    ConsumedHeatingToday,
    ConsumedHeatingTotalLow,
    ConsumedHeatingTotalHigh,
    ConsumedWaterHeatingToday,
    ConsumedWaterHeatingTotalLow,
    ConsumedWaterHeatingTotalHigh,
    CompressorHeatingHours,
    CompressorWaterHeatingHours,
    CompressorCoolingHours,
    BoosterStage1Hours,
    BoosterStage2Hours,
    BoosterStage12Hours,
    ProducedHeatingTodayHp1,
    ProducedHeatingTotalLowHp1,
    ProducedHeatingTotalHighHp1,
    ProducedWaterHeatingTodayHp1,
    ProducedWaterHeatingTotalLowHp1,
    ProducedWaterHeatingTotalHighHp1,
    ProducedBoosterHeatingTotalLowHp1,
    ProducedBoosterHeatingTotalHighHp1,
    ProducedBoosterWaterHeatingTotalLowHp1,
    ProducedBoosterWaterHeatingTotalHighHp1,
    ConsumedHeatingTodayHp1,
    ConsumedHeatingTotalLowHp1,
    ConsumedHeatingTotalHighHp1,
    ConsumedWaterHeatingTodayHp1,
    ConsumedWaterHeatingTotalLowHp1,
    ConsumedWaterHeatingTotalHighHp1,
    Compressor1HeatingHoursHp1,
    Compressor2HeatingHoursHp1,
    Compressor12HeatingHoursHp1,
    Compressor1WaterHeatingHoursHp1,
    Compressor2WaterHeatingHoursHp1,
    Compressor12WaterHeatingHoursHp1,
    CompressorCoolingHoursHp1,
    BoosterStage1ReheatingHours,
    BoosterStage2ReheatingHours,
    BoosterStage12ReheatingHours,
    ProducedHeatingTodayHp2,
    ProducedHeatingTotalLowHp2,
    ProducedHeatingTotalHighHp2,
    ProducedWaterHeatingTodayHp2,
    ProducedWaterHeatingTotalLowHp2,
    ProducedWaterHeatingTotalHighHp2,
    ConsumedHeatingTodayHp2,
    ConsumedHeatingTotalLowHp2,
    ConsumedHeatingTotalHighHp2,
    ConsumedWaterHeatingTodayHp2,
    ConsumedWaterHeatingTotalLowHp2,
    ConsumedWaterHeatingTotalHighHp2,
    Compressor1HeatingHoursHp2,
    Compressor2HeatingHoursHp2,
    Compressor12HeatingHoursHp2,
    Compressor1WaterHeatingHoursHp2,
    Compressor2WaterHeatingHoursHp2,
    Compressor12WaterHeatingHoursHp2,
    CompressorCoolingHoursHp2,
    ProducedHeatingTodayHp3,
    ProducedHeatingTotalLowHp3,
    ProducedHeatingTotalHighHp3,
    ProducedWaterHeatingTodayHp3,
    ProducedWaterHeatingTotalLowHp3,
    ProducedWaterHeatingTotalHighHp3,
    ConsumedHeatingTodayHp3,
    ConsumedHeatingTotalLowHp3,
    ConsumedHeatingTotalHighHp3,
    ConsumedWaterHeatingTodayHp3,
    ConsumedWaterHeatingTotalLowHp3,
    ConsumedWaterHeatingTotalHighHp3,
    Compressor1HeatingHoursHp3,
    Compressor2HeatingHoursHp3,
    Compressor12HeatingHoursHp3,
    Compressor1WaterHeatingHoursHp3,
    Compressor2WaterHeatingHoursHp3,
    Compressor12WaterHeatingHoursHp3,
    CompressorCoolingHoursHp3,
    ProducedRecoveryToday,
    ProducedRecoveryTotalLow,
    ProducedRecoveryTotalHigh,
    ProducedSolarHeatingToday,
    ProducedSolarHeatingTotalLow,
    ProducedSolarHeatingTotalHigh,
    ProducedSolarWaterHeatingToday,
    ProducedSolarWaterHeatingTotalLow,
    ProducedSolarWaterHeatingTotalHigh,
    ProducedCoolingTotalLow,
    ProducedCoolingTotalHigh,
    BoosterHeatingHours,
    BoosterWaterHeatingHours,
    // SG Ready and identification
    SgReadyActive,
    SgReadyInput1,
    SgReadyInput2,
    SgReadyOperatingState,
    ControllerIdentification,
    // Derived from two or more physical registers
    ProducedHeatingTotal,
    ProducedHeatingLifetime,
    ProducedWaterHeatingTotal,
    ProducedWaterHeatingLifetime,
    ProducedBoosterHeatingTotal,
    ProducedBoosterWaterHeatingTotal,
    ConsumedHeatingTotal,
    ConsumedHeatingLifetime,
    ConsumedWaterHeatingTotal,
    ConsumedWaterHeatingLifetime,
    ProducedHeatingTotalHp1,
    ProducedHeatingLifetimeHp1,
    ProducedWaterHeatingTotalHp1,
    ProducedWaterHeatingLifetimeHp1,
    ProducedBoosterHeatingTotalHp1,
    ProducedBoosterWaterHeatingTotalHp1,
    ConsumedHeatingTotalHp1,
    ConsumedHeatingLifetimeHp1,
    ConsumedWaterHeatingTotalHp1,
    ConsumedWaterHeatingLifetimeHp1,
    ProducedHeatingTotalHp2,
    ProducedHeatingLifetimeHp2,
    ProducedWaterHeatingTotalHp2,
    ProducedWaterHeatingLifetimeHp2,
    ConsumedHeatingTotalHp2,
    ConsumedHeatingLifetimeHp2,
    ConsumedWaterHeatingTotalHp2,
    ConsumedWaterHeatingLifetimeHp2,
    ProducedHeatingTotalHp3,
    ProducedHeatingLifetimeHp3,
    ProducedWaterHeatingTotalHp3,
    ProducedWaterHeatingLifetimeHp3,
    ConsumedHeatingTotalHp3,
    ConsumedHeatingLifetimeHp3,
    ConsumedWaterHeatingTotalHp3,
    ConsumedWaterHeatingLifetimeHp3,
    ProducedRecoveryTotal,
    ProducedRecoveryLifetime,
    ProducedSolarHeatingTotal,
    ProducedSolarHeatingLifetime,
    ProducedSolarWaterHeatingTotal,
    ProducedSolarWaterHeatingLifetime,
    ProducedCoolingTotal,
    CompressorStarts,
}

impl serde::Serialize for RegisterId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum RegisterKind {
    /// Read-only telemetry, read with function code 4.
    Input,
    /// Parameters and commands, read with function code 3 and written with 6 or 16.
    Holding,
}

impl serde::Serialize for RegisterKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Family {
    Lwz,
    Wpm,
}

impl Family {
    /// Select the family a controller identification word belongs to.
    pub fn from_model_id(id: u16) -> Option<Self> {
        match id {
            103 | 104 => Some(Self::Lwz),
            390.. => Some(Self::Wpm),
            _ => None,
        }
    }

    pub fn catalog(self) -> &'static RegisterCatalog {
        match self {
            Self::Lwz => &LWZ,
            Self::Wpm => &WPM,
        }
    }
}

impl serde::Serialize for Family {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.into())
    }
}

/// Controllers known by their identification word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, num_derive::FromPrimitive, strum::Display)]
#[repr(u16)]
pub enum ControllerModel {
    #[strum(to_string = "LWA/LWZ")]
    Lwa = 103,
    #[strum(to_string = "LWZ")]
    Lwz = 104,
    #[strum(to_string = "WPM 3")]
    Wpm3 = 390,
    #[strum(to_string = "WPM 3i")]
    Wpm3i = 391,
    #[strum(to_string = "WPMsystem")]
    WpmSystem = 449,
}

/// The resolved family along with the raw identification word it was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ModelIdentity {
    pub family: Family,
    pub id: u16,
}

impl ModelIdentity {
    pub fn from_id(id: u16) -> Option<Self> {
        Family::from_model_id(id).map(|family| Self { family, id })
    }

    pub fn model(&self) -> Option<ControllerModel> {
        num_traits::FromPrimitive::from_u16(self.id)
    }
}

impl std::fmt::Display for ModelIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.model() {
            Some(model) => f.write_fmt(format_args!("{model}")),
            None => f.write_fmt(format_args!("other model ({})", self.id)),
        }
    }
}

/// A command a family supports beyond plain register writes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetCommand {
    pub register: RegisterId,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capabilities {
    /// Controller reset, if the family has one.
    pub reset: Option<ResetCommand>,
}

/// Index into [`RegisterCatalog::blocks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterDescriptor {
    pub id: RegisterId,
    pub kind: RegisterKind,
    /// 1-based, as numbered in the vendor documentation.
    pub address: u16,
    pub encoding: Encoding,
    /// Divisor applied on top of the one implied by the encoding.
    pub scale: u16,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Raw words the register accepts, when it is an enumeration.
    pub choices: Option<&'static [u16]>,
    pub block: BlockId,
    pub unit: &'static str,
    /// Name of the register in the vendor documentation.
    pub name: &'static str,
}

impl RegisterDescriptor {
    pub fn decode(&self, raw: u16) -> Option<Value> {
        codec::decode(raw, self.encoding, self.scale)
    }

    /// Encode a value for writing, checking it against the declared range first.
    pub fn encode(&self, value: f64) -> Result<u16, EncodingError> {
        let below = self.min.is_some_and(|min| value < min);
        let above = self.max.is_some_and(|max| value > max);
        if below || above {
            return Err(EncodingError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        let raw = codec::encode(value, self.encoding, self.scale)?;
        if let Some(choices) = self.choices {
            if !choices.contains(&raw) {
                return Err(EncodingError::NotAChoice(value));
            }
        }
        Ok(raw)
    }

    /// Whether writing this register on its own is meaningful.
    ///
    /// Individual bits of a status word are never writable.
    pub fn is_writable(&self) -> bool {
        self.kind == RegisterKind::Holding && !matches!(self.encoding, Encoding::BitFlags { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitHighLow {
    /// Fine word, counting 0 to 999.
    pub low: RegisterId,
    /// Coarse word, counting thousands of `low`.
    pub high: RegisterId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Derivation {
    SplitHighLow(SplitHighLow),
    /// A daily counter on top of the total of all the previous days.
    DayPlusTotal { day: RegisterId, total: SplitHighLow },
}

impl Derivation {
    pub const fn is_cumulative(&self) -> bool {
        matches!(self, Self::DayPlusTotal { .. })
    }

    pub fn sources(&self) -> Vec<RegisterId> {
        match *self {
            Self::SplitHighLow(SplitHighLow { low, high }) => vec![low, high],
            Self::DayPlusTotal { day, total } => vec![day, total.low, total.high],
        }
    }
}

impl std::fmt::Display for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SplitHighLow(SplitHighLow { low, high }) => {
                f.write_fmt(format_args!("{high} * 1000 + {low}"))
            }
            Self::DayPlusTotal { day, total } => f.write_fmt(format_args!(
                "{} * 1000 + {} + {day}",
                total.high, total.low
            )),
        }
    }
}

/// A register that does not exist on the wire and is computed from other registers instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualRegister {
    pub id: RegisterId,
    pub derivation: Derivation,
    /// The published value never decreases, other than for a reset back to zero.
    pub monotonic: bool,
    pub unit: &'static str,
}

struct Entry {
    id: RegisterId,
    address: u16,
    encoding: Encoding,
    unit: &'static str,
    name: &'static str,
    min: Option<f64>,
    max: Option<f64>,
    choices: Option<&'static [u16]>,
}

/// Registers of one kind that are documented together.
struct Section {
    name: &'static str,
    kind: RegisterKind,
    registers: &'static [Entry],
}

/// Every register of one controller family.
#[derive(Debug)]
pub struct RegisterCatalog {
    family: Family,
    descriptors: Vec<RegisterDescriptor>,
    index: BTreeMap<RegisterId, usize>,
    blocks: Vec<RegisterBlock>,
    virtuals: &'static [VirtualRegister],
    capabilities: Capabilities,
}

static LWZ: LazyLock<RegisterCatalog> = LazyLock::new(|| {
    RegisterCatalog::build(
        Family::Lwz,
        &[lwz::SECTIONS, common::SECTIONS],
        lwz::VIRTUALS,
        lwz::CAPABILITIES,
    )
});

static WPM: LazyLock<RegisterCatalog> = LazyLock::new(|| {
    RegisterCatalog::build(
        Family::Wpm,
        &[wpm::SECTIONS, common::SECTIONS],
        wpm::VIRTUALS,
        wpm::CAPABILITIES,
    )
});

impl RegisterCatalog {
    fn build(
        family: Family,
        tables: &[&'static [Section]],
        virtuals: &'static [VirtualRegister],
        capabilities: Capabilities,
    ) -> Self {
        let mut descriptors = Vec::new();
        let mut blocks = Vec::new();
        for section in tables.iter().flat_map(|t| t.iter()) {
            let first_block = blocks.len();
            blocks.extend(blocks::plan(
                section.name,
                section.kind,
                section.registers.iter().map(|e| e.address),
            ));
            let section_blocks = &blocks[first_block..];
            for entry in section.registers {
                let offset = section_blocks
                    .partition_point(|b| b.first <= entry.address)
                    .saturating_sub(1);
                descriptors.push(RegisterDescriptor {
                    id: entry.id,
                    kind: section.kind,
                    address: entry.address,
                    encoding: entry.encoding,
                    scale: 1,
                    min: entry.min,
                    max: entry.max,
                    choices: entry.choices,
                    block: BlockId(first_block + offset),
                    unit: entry.unit,
                    name: entry.name,
                });
            }
        }
        let index = descriptors.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        Self {
            family,
            descriptors,
            index,
            blocks,
            virtuals,
            capabilities,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Physical registers, in the order they are read.
    pub fn descriptors(&self) -> &[RegisterDescriptor] {
        &self.descriptors
    }

    pub fn blocks(&self) -> &[RegisterBlock] {
        &self.blocks
    }

    pub fn virtuals(&self) -> &[VirtualRegister] {
        self.virtuals
    }

    pub fn descriptor(&self, id: RegisterId) -> Option<&RegisterDescriptor> {
        self.index.get(&id).map(|&i| &self.descriptors[i])
    }

    pub fn virtual_register(&self, id: RegisterId) -> Option<&VirtualRegister> {
        self.virtuals.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modbus::MAX_READ_COUNT;
    use std::collections::BTreeSet;

    fn catalogs() -> [&'static RegisterCatalog; 2] {
        [Family::Lwz.catalog(), Family::Wpm.catalog()]
    }

    #[test]
    fn identifiers_are_unique_per_family() {
        for catalog in catalogs() {
            assert_eq!(catalog.index.len(), catalog.descriptors.len(), "{}", catalog.family);
            let mut virtual_ids = BTreeSet::new();
            for v in catalog.virtuals() {
                assert!(virtual_ids.insert(v.id), "{:?}", v.id);
                assert!(catalog.descriptor(v.id).is_none(), "{:?}", v.id);
            }
        }
    }

    #[test]
    fn every_address_is_in_exactly_one_block() {
        for catalog in catalogs() {
            for descriptor in catalog.descriptors() {
                let containing = catalog
                    .blocks()
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| b.kind == descriptor.kind && b.contains(descriptor.address))
                    .map(|(i, _)| i)
                    .collect::<Vec<_>>();
                assert_eq!(containing, [descriptor.block.index()], "{:?}", descriptor.id);
            }
            for block in catalog.blocks() {
                assert!(block.count <= MAX_READ_COUNT, "{}", block.name);
                assert!(block.count > 0, "{}", block.name);
            }
        }
    }

    #[test]
    fn only_status_bits_share_a_word() {
        for catalog in catalogs() {
            let mut words = BTreeMap::<(RegisterKind, u16), Vec<Encoding>>::new();
            for d in catalog.descriptors() {
                words.entry((d.kind, d.address)).or_default().push(d.encoding);
            }
            for ((_, address), encodings) in words {
                let whole = encodings.iter().filter(|e| !matches!(e, Encoding::BitFlags { .. }));
                assert!(whole.count() <= 1, "{} {address}", catalog.family);
            }
        }
    }

    #[test]
    fn virtual_sources_are_plain_counters() {
        for catalog in catalogs() {
            for v in catalog.virtuals() {
                for source in v.derivation.sources() {
                    let descriptor = catalog.descriptor(source).unwrap();
                    assert_eq!(descriptor.encoding, Encoding::UnsignedRawA, "{source:?}");
                    assert_eq!(descriptor.kind, RegisterKind::Input, "{source:?}");
                }
                assert_eq!(v.monotonic, v.derivation.is_cumulative(), "{:?}", v.id);
            }
        }
    }

    #[test]
    fn gaps_split_blocks() {
        let catalog = Family::Wpm.catalog();
        let parameters = catalog
            .blocks()
            .iter()
            .filter(|b| b.name == "System Parameters")
            .map(|b| (b.first, b.count))
            .collect::<Vec<_>>();
        assert_eq!(parameters, [(1501, 21), (1550, 3)]);
        let reset = catalog.descriptor(RegisterId::Reset).unwrap();
        assert_eq!((reset.address, reset.kind), (1520, RegisterKind::Holding));
    }

    #[test]
    fn shared_identifiers_differ_in_address() {
        let lwz = Family::Lwz.catalog().descriptor(RegisterId::IsHeating).unwrap();
        let wpm = Family::Wpm.catalog().descriptor(RegisterId::IsHeating).unwrap();
        assert_eq!((lwz.address, lwz.encoding), (2001, Encoding::BitFlags { bit: 2 }));
        assert_eq!((wpm.address, wpm.encoding), (2501, Encoding::BitFlags { bit: 4 }));
        for catalog in catalogs() {
            let id = catalog.descriptor(RegisterId::ControllerIdentification).unwrap();
            assert_eq!(
                (id.kind, id.address, id.encoding),
                (IDENTIFICATION_KIND, IDENTIFICATION_ADDRESS, IDENTIFICATION_ENCODING)
            );
        }
    }

    #[test]
    fn family_selection() {
        assert_eq!(Family::from_model_id(103), Some(Family::Lwz));
        assert_eq!(Family::from_model_id(104), Some(Family::Lwz));
        assert_eq!(Family::from_model_id(390), Some(Family::Wpm));
        assert_eq!(Family::from_model_id(449), Some(Family::Wpm));
        assert_eq!(Family::from_model_id(1000), Some(Family::Wpm));
        for id in [0, 102, 105, 389] {
            assert_eq!(Family::from_model_id(id), None, "{id}");
        }
        assert_eq!(ModelIdentity::from_id(391).unwrap().to_string(), "WPM 3i");
        assert_eq!(ModelIdentity::from_id(103).unwrap().to_string(), "LWA/LWZ");
        assert_eq!(ModelIdentity::from_id(500).unwrap().to_string(), "other model (500)");
        assert_eq!("wpm".parse::<Family>(), Ok(Family::Wpm));
    }

    #[test]
    fn reset_is_a_wpm_capability() {
        assert_eq!(Family::Lwz.catalog().capabilities().reset, None);
        let reset = Family::Wpm.catalog().capabilities().reset.unwrap();
        let descriptor = Family::Wpm.catalog().descriptor(reset.register).unwrap();
        assert_eq!(descriptor.encode(reset.value), Ok(3));
    }

    #[test]
    fn descriptor_encode_checks_range_and_choices() {
        let wpm = Family::Wpm.catalog();
        let comfort = wpm.descriptor(RegisterId::ComfortTemperatureHk1).unwrap();
        assert_eq!(comfort.encode(21.5), Ok(215));
        assert!(matches!(comfort.encode(30.5), Err(EncodingError::OutOfRange { .. })));
        assert!(matches!(comfort.encode(4.9), Err(EncodingError::OutOfRange { .. })));

        let mode = Family::Lwz.catalog().descriptor(RegisterId::OperatingMode).unwrap();
        assert_eq!(mode.encode(11.0), Ok(11));
        assert_eq!(mode.encode(2.0), Err(EncodingError::NotAChoice(2.0)));
    }

    #[test]
    fn flags_are_not_writable() {
        let wpm = Family::Wpm.catalog();
        assert!(!wpm.descriptor(RegisterId::IsHeating).unwrap().is_writable());
        assert!(!wpm.descriptor(RegisterId::OutsideTemperature).unwrap().is_writable());
        assert!(wpm.descriptor(RegisterId::EcoTemperatureHk2).unwrap().is_writable());
    }

    #[test]
    fn register_names_are_unique() {
        use strum::VariantArray as _;
        let mut names = BTreeSet::new();
        for &id in RegisterId::VARIANTS {
            let name: &'static str = id.into();
            assert!(names.insert(name), "{name}");
        }
        for catalog in catalogs() {
            for d in catalog.descriptors() {
                assert!(names.contains(<&'static str>::from(d.id)), "{:?}", d.id);
            }
        }
    }

    #[test]
    fn names_round_trip_through_strings() {
        assert_eq!(RegisterId::IsHeating.to_string(), "IS_HEATING");
        assert_eq!("is_heating".parse::<RegisterId>(), Ok(RegisterId::IsHeating));
        assert_eq!(
            serde_json::to_string(&RegisterId::ProducedHeatingLifetime).unwrap(),
            r#""PRODUCED_HEATING_LIFETIME""#
        );
    }
}
