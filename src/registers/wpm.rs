//! Register map of the WPM family (WPM 3, WPM 3i and WPMsystem heat pump managers).

use super::{
    Capabilities, Derivation, Entry, RegisterId, RegisterKind, ResetCommand, S10, S100, Section,
    SplitHighLow, UA, UB, VirtualRegister, bit,
};

pub(super) const CAPABILITIES: Capabilities = Capabilities {
    reset: Some(ResetCommand {
        register: RegisterId::Reset,
        value: 3.0,
    }),
};

pub(super) static SECTIONS: &[Section] = &[
    Section {
        name: "System Values",
        kind: RegisterKind::Input,
        registers: registers! {
            ActualTemperatureFe7: 501, S10, "°C", "ACTUAL TEMPERATURE FE7";
            SetTemperatureFe7: 502, S10, "°C", "SET TEMPERATURE FE7";
            ActualTemperatureFek: 503, S10, "°C", "ACTUAL TEMPERATURE FEK";
            SetTemperatureFek: 504, S10, "°C", "SET TEMPERATURE FEK";
            RelativeHumidity: 505, S10, "%", "RELATIVE HUMIDITY";
            DewPointTemperature: 506, S10, "°C", "DEW POINT TEMPERATURE", min = -40.0, max = 30.0;
            OutsideTemperature: 507, S10, "°C", "OUTSIDE TEMPERATURE", min = -60.0, max = 80.0;
            ActualTemperatureHk1: 508, S10, "°C", "ACTUAL TEMPERATURE HK 1", min = 0.0, max = 40.0;
            SetTemperatureHk1Wpm3i: 509, S10, "°C", "SET TEMPERATURE HK 1", min = 0.0, max = 65.0;
            SetTemperatureHk1: 510, S10, "°C", "SET TEMPERATURE HK 1", min = 0.0, max = 40.0;
            ActualTemperatureHk2: 511, S10, "°C", "ACTUAL TEMPERATURE HK 2", min = 0.0, max = 90.0;
            SetTemperatureHk2: 512, S10, "°C", "SET TEMPERATURE HK 2", min = 0.0, max = 65.0;
            ActualFlowTemperatureHeatPump: 513, S10, "°C", "ACTUAL FLOW TEMPERATURE WP";
            ActualFlowTemperatureBooster: 514, S10, "°C", "ACTUAL FLOW TEMPERATURE NHZ";
            ActualFlowTemperature: 515, S10, "°C", "ACTUAL FLOW TEMPERATURE";
            ActualReturnTemperature: 516, S10, "°C", "ACTUAL RETURN TEMPERATURE", min = 0.0, max = 90.0;
            SetFixedTemperature: 517, S10, "°C", "SET FIXED TEMPERATURE", min = 20.0, max = 50.0;
            ActualBufferTemperature: 518, S10, "°C", "ACTUAL BUFFER TEMPERATURE", min = 0.0, max = 90.0;
            SetBufferTemperature: 519, S10, "°C", "SET BUFFER TEMPERATURE";
            HeatingPressure: 520, S100, "bar", "HEATING PRESSURE";
            FlowRate: 521, S10, "l/min", "FLOW RATE";
            ActualTemperatureDhw: 522, S10, "°C", "ACTUAL TEMPERATURE DHW", min = 10.0, max = 65.0;
            SetTemperatureDhw: 523, S10, "°C", "SET TEMPERATURE DHW", min = 10.0, max = 65.0;
            ActualTemperatureFan: 524, S10, "K", "ACTUAL TEMPERATURE FAN";
            SetTemperatureFan: 525, S10, "K", "SET TEMPERATURE FAN", min = 7.0, max = 25.0;
            ActualTemperatureArea: 526, S10, "K", "ACTUAL TEMPERATURE AREA";
            SetTemperatureArea: 527, S10, "K", "SET TEMPERATURE AREA";
            CollectorTemperature: 528, S10, "°C", "COLLECTOR TEMPERATURE", min = 0.0, max = 90.0;
            CylinderTemperature: 529, S10, "°C", "CYLINDER TEMPERATURE", min = 0.0, max = 90.0;
            Runtime: 530, UA, "h", "RUNTIME";
            ActualTemperatureExternal: 531, S10, "°C", "ACTUAL TEMPERATURE EXTERNAL", min = 10.0, max = 90.0;
            SetTemperatureExternal: 532, S10, "K", "SET TEMPERATURE EXTERNAL";
            ApplicationLimitHeating: 533, S10, "°C", "APPLICATION LIMIT HZG", min = -40.0, max = 40.0;
            ApplicationLimitDhw: 534, S10, "°C", "APPLICATION LIMIT WW", min = -40.0, max = 40.0;
            RuntimeExternalHeatSource: 535, UA, "h", "RUNTIME";
            SourceTemperature: 536, S10, "°C", "SOURCE TEMPERATURE";
            MinSourceTemperature: 537, S10, "°C", "MIN SOURCE TEMPERATURE", min = -10.0, max = 10.0;
            SourcePressure: 538, S100, "bar", "SOURCE PRESSURE";
            HotGasTemperature: 539, S10, "°C", "HOT GAS TEMPERATURE";
            HighPressure: 540, S10, "bar", "HIGH PRESSURE";
            LowPressure: 541, S10, "bar", "LOW PRESSURE";
            ReturnTemperatureHp1: 542, S10, "°C", "RETURN TEMPERATURE";
            FlowTemperatureHp1: 543, S10, "°C", "FLOW TEMPERATURE";
            HotGasTemperatureHp1: 544, S10, "°C", "HOT GAS TEMPERATURE";
            LowPressureHp1: 545, S100, "bar", "LOW PRESSURE";
            MeanPressureHp1: 546, S100, "bar", "MEAN PRESSURE";
            HighPressureHp1: 547, S100, "bar", "HIGH PRESSURE";
            WaterFlowRateHp1: 548, S10, "l/min", "WP WATER FLOW RATE";
            ReturnTemperatureHp2: 549, S10, "°C", "RETURN TEMPERATURE";
            FlowTemperatureHp2: 550, S10, "°C", "FLOW TEMPERATURE";
            HotGasTemperatureHp2: 551, S10, "°C", "HOT GAS TEMPERATURE";
            LowPressureHp2: 552, S100, "bar", "LOW PRESSURE";
            MeanPressureHp2: 553, S100, "bar", "MEAN PRESSURE";
            HighPressureHp2: 554, S100, "bar", "HIGH PRESSURE";
            WaterFlowRateHp2: 555, S10, "l/min", "WP WATER FLOW RATE";
            ReturnTemperatureHp3: 556, S10, "°C", "RETURN TEMPERATURE";
            FlowTemperatureHp3: 557, S10, "°C", "FLOW TEMPERATURE";
            HotGasTemperatureHp3: 558, S10, "°C", "HOT GAS TEMPERATURE";
            LowPressureHp3: 559, S100, "bar", "LOW PRESSURE";
            MeanPressureHp3: 560, S100, "bar", "MEAN PRESSURE";
            HighPressureHp3: 561, S100, "bar", "HIGH PRESSURE";
            WaterFlowRateHp3: 562, S10, "l/min", "WP WATER FLOW RATE";
            ReturnTemperatureHp4: 563, S10, "°C", "RETURN TEMPERATURE";
            FlowTemperatureHp4: 564, S10, "°C", "FLOW TEMPERATURE";
            HotGasTemperatureHp4: 565, S10, "°C", "HOT GAS TEMPERATURE";
            LowPressureHp4: 566, S100, "bar", "LOW PRESSURE";
            MeanPressureHp4: 567, S100, "bar", "MEAN PRESSURE";
            HighPressureHp4: 568, S100, "bar", "HIGH PRESSURE";
            WaterFlowRateHp4: 569, S10, "l/min", "WP WATER FLOW RATE";
            ReturnTemperatureHp5: 570, S10, "°C", "RETURN TEMPERATURE";
            FlowTemperatureHp5: 571, S10, "°C", "FLOW TEMPERATURE";
            HotGasTemperatureHp5: 572, S10, "°C", "HOT GAS TEMPERATURE";
            LowPressureHp5: 573, S100, "bar", "LOW PRESSURE";
            MeanPressureHp5: 574, S100, "bar", "MEAN PRESSURE";
            HighPressureHp5: 575, S100, "bar", "HIGH PRESSURE";
            WaterFlowRateHp5: 576, S10, "l/min", "WP WATER RATE";
            ReturnTemperatureHp6: 577, S10, "°C", "RETURN TEMPERATURE";
            FlowTemperatureHp6: 578, S10, "°C", "FLOW TEMPERATURE";
            HotGasTemperatureHp6: 579, S10, "°C", "HOT GAS";
            LowPressureHp6: 580, S100, "bar", "LOW PRESSURE";
            MeanPressureHp6: 581, S100, "bar", "MEAN PRESSURE";
            HighPressureHp6: 582, S100, "bar", "HIGH PRESSURE";
            WaterFlowRateHp6: 583, S10, "l/min", "WP WATER FLOW RATE";
            ActualRoomTemperatureHk1: 584, S10, "°C", "ACTUAL TEMPERATURE";
            SetRoomTemperatureHk1: 585, S10, "°C", "SET TEMPERATURE";
            RelativeHumidityHk1: 586, S10, "%", "RELATIVE HUMIDITY";
            DewPointTemperatureHk1: 587, S10, "°C", "DEW POINT TEMPERATURE";
            ActualRoomTemperatureHk2: 588, S10, "°C", "ACTUAL TEMPERATURE";
            SetRoomTemperatureHk2: 589, S10, "°C", "SET TEMPERATURE";
            RelativeHumidityHk2: 590, S10, "%", "RELATIVE HUMIDITY";
            DewPointTemperatureHk2: 591, S10, "°C", "DEW POINT TEMPERATURE";
            ActualRoomTemperatureHk3: 592, S10, "°C", "ACTUAL TEMPERATURE";
            SetRoomTemperatureHk3: 593, S10, "°C", "SET TEMPERATURE";
            RelativeHumidityHk3: 594, S10, "%", "RELATIVE HUMIDITY";
            DewPointTemperatureHk3: 595, S10, "°C", "DEW POINT TEMPERATURE";
            ActualRoomTemperatureHk4: 596, S10, "°C", "ACTUAL TEMPERATURE";
            SetRoomTemperatureHk4: 597, S10, "°C", "SET TEMPERATURE";
            RelativeHumidityHk4: 598, S10, "%", "RELATIVE HUMIDITY";
            DewPointTemperatureHk4: 599, S10, "°C", "DEW POINT TEMPERATURE";
            ActualRoomTemperatureHk5: 600, S10, "°C", "ACTUAL TEMPERATURE";
            SetRoomTemperatureHk5: 601, S10, "°C", "SET TEMPERATURE";
            RelativeHumidityHk5: 602, S10, "%", "RELATIVE HUMIDITY";
            DewPointTemperatureHk5: 603, S10, "°C", "DEW POINT TEMPERATURE";
            SetRoomTemperatureCoolingHk1: 604, S10, "°C", "SET TEMPERATURE";
            SetRoomTemperatureCoolingHk2: 605, S10, "°C", "SET TEMPERATURE";
            SetRoomTemperatureCoolingHk3: 606, S10, "°C", "SET TEMPERATURE";
            SetRoomTemperatureCoolingHk4: 607, S10, "°C", "SET TEMPERATURE";
            SetRoomTemperatureCoolingHk5: 608, S10, "°C", "SET TEMPERATURE";
            ActualTemperatureHk3: 609, S10, "°C", "ACTUAL TEMPERATURE HK 3", min = 0.0, max = 90.0;
            SetTemperatureHk3: 610, S10, "°C", "SET TEMPERATURE HK 3", min = 0.0, max = 65.0;
        },
    },
    Section {
        name: "System Parameters",
        kind: RegisterKind::Holding,
        registers: registers! {
            OperatingMode: 1501, UB, "", "OPERATING MODE", min = 0.0, max = 5.0;
            ComfortTemperatureHk1: 1502, S10, "°C", "COMFORT TEMPERATURE", min = 5.0, max = 30.0;
            EcoTemperatureHk1: 1503, S10, "°C", "ECO TEMPERATURE", min = 5.0, max = 30.0;
            HeatingCurveRiseHk1: 1504, S100, "", "HEATING CURVE RISE", min = 0.0, max = 3.0;
            ComfortTemperatureHk2: 1505, S10, "°C", "COMFORT TEMPERATURE", min = 5.0, max = 30.0;
            EcoTemperatureHk2: 1506, S10, "°C", "ECO TEMPERATURE", min = 5.0, max = 30.0;
            HeatingCurveRiseHk2: 1507, S100, "", "HEATING CURVE RISE", min = 0.0, max = 3.0;
            FixedValueOperation: 1508, S10, "°C", "FIXED VALUE OPERATION", min = 20.0, max = 70.0;
            DualModeTemperatureHeating: 1509, S10, "°C", "DUAL MODE TEMP HZG", min = -40.0, max = 40.0;
            ComfortTemperatureDhw: 1510, S10, "°C", "COMFORT TEMPERATURE", min = 10.0, max = 60.0;
            EcoTemperatureDhw: 1511, S10, "°C", "ECO TEMPERATURE", min = 10.0, max = 60.0;
            DhwStages: 1512, UB, "", "DHW STAGES", min = 0.0, max = 6.0;
            DualModeTemperatureDhw: 1513, S10, "°C", "DUAL MODE TEMP WW", min = -40.0, max = 40.0;
            SetFlowTemperatureArea: 1514, S10, "°C", "SET FLOW TEMPERATURE", min = 7.0, max = 25.0;
            FlowTemperatureHysteresisArea: 1515, S10, "K", "FLOW TEMP HYSTERESIS", min = 1.0, max = 5.0;
            SetRoomTemperatureArea: 1516, S10, "°C", "SET ROOM TEMPERATURE", min = 20.0, max = 30.0;
            SetFlowTemperatureFan: 1517, S10, "°C", "SET FLOW TEMPERATURE", min = 7.0, max = 25.0;
            FlowTemperatureHysteresisFan: 1518, S10, "K", "FLOW TEMP HYSTERESIS", min = 1.0, max = 5.0;
            SetRoomTemperatureFan: 1519, S10, "°C", "SET ROOM TEMPERATURE", min = 20.0, max = 30.0;
            Reset: 1520, UA, "", "RESET", min = 1.0, max = 3.0;
            RestartIsg: 1521, UA, "", "RESTART ISG", min = 0.0, max = 2.0;
            ComfortTemperatureHk3: 1550, S10, "°C", "COMFORT TEMPERATURE", min = 5.0, max = 30.0;
            EcoTemperatureHk3: 1551, S10, "°C", "ECO TEMPERATURE", min = 5.0, max = 30.0;
            HeatingCurveRiseHk3: 1552, S100, "", "HEATING CURVE RISE", min = 0.0, max = 3.0;
        },
    },
    Section {
        name: "System State",
        kind: RegisterKind::Input,
        registers: registers! {
            OperatingStatus: 2501, UA, "", "OPERATING STATUS";
            PumpOnHk1: 2501, bit(0), "", "PUMP ON HK1";
            PumpOnHk2: 2501, bit(1), "", "PUMP ON HK2";
            HeatUpProgram: 2501, bit(2), "", "HEAT UP PROGRAM";
            BoosterStagesRunning: 2501, bit(3), "", "NHZ STAGES RUNNING";
            IsHeating: 2501, bit(4), "", "IS HEATING";
            IsHeatingWater: 2501, bit(5), "", "IS HEATING WATER";
            CompressorOn: 2501, bit(6), "", "COMPRESSOR RUNNING";
            IsSummerMode: 2501, bit(7), "", "IS SUMMER MODE";
            IsCooling: 2501, bit(8), "", "IS COOLING";
            PowerOff: 2502, UB, "", "POWER OFF";
            OperatingStatusWpm3: 2503, UA, "", "OPERATING STATUS";
            FaultStatus: 2504, UA, "", "FAULT STATUS", min = 0.0, max = 1.0;
            BusStatus: 2505, UA, "", "BUS STATUS", min = -4.0, max = 0.0;
            DefrostInitiated: 2506, UA, "", "DEFROST INITIATED", min = 0.0, max = 1.0;
            ActiveError: 2507, UA, "", "ACTIVE ERROR", min = 0.0, max = 65535.0;
            MessageNumber: 2508, UA, "", "MESSAGE NUMBER", min = 0.0, max = 65535.0;
            HeatingCircuitPump1: 2509, UA, "", "HEATING CIRCUIT PUMP 1", min = 0.0, max = 1.0;
            HeatingCircuitPump2: 2510, UA, "", "HEATING CIRCUIT PUMP 2", min = 0.0, max = 1.0;
            HeatingCircuitPump3: 2511, UA, "", "HEATING CIRCUIT PUMP 3", min = 0.0, max = 1.0;
            BufferChargingPump1: 2512, UA, "", "BUFFER CHARGING PUMP 1", min = 0.0, max = 1.0;
            BufferChargingPump2: 2513, UA, "", "BUFFER CHARGING PUMP 2", min = 0.0, max = 1.0;
            DhwChargingPump: 2514, UA, "", "DHW CHARGING PUMP", min = 0.0, max = 1.0;
            SourcePump: 2515, UA, "", "SOURCE PUMP", min = 0.0, max = 1.0;
            FaultOutput: 2516, UA, "", "FAULT OUTPUT", min = 0.0, max = 1.0;
            DhwCirculationPump: 2517, UA, "", "DHW CIRCULATION PUMP", min = 0.0, max = 1.0;
            SecondHeatGeneratorDhw: 2518, UA, "", "WE 2 DHW", min = 0.0, max = 1.0;
            SecondHeatGeneratorHeating: 2519, UA, "", "WE 2 HEATING", min = 0.0, max = 1.0;
            CoolingMode: 2520, UA, "", "COOLING MODE", min = 0.0, max = 1.0;
            MixerOpenHk2: 2521, UA, "", "MIXER OPEN HC2", min = 0.0, max = 1.0;
            MixerCloseHk2: 2522, UA, "", "MIXER CLOSE HC2", min = 0.0, max = 1.0;
            MixerOpenHk3: 2523, UA, "", "MIXER OPEN HC3", min = 0.0, max = 1.0;
            MixerCloseHk3: 2524, UA, "", "MIXER CLOSE HC3", min = 0.0, max = 1.0;
            BoosterStage1: 2525, UA, "", "NHZ 1", min = 0.0, max = 1.0;
            BoosterStage2: 2526, UA, "", "NHZ 2", min = 0.0, max = 1.0;
            BoosterStage12: 2527, UA, "", "NHZ 1 2", min = 0.0, max = 1.0;
            HeatingCircuitPump4: 2528, UA, "", "HEATING CIRCUIT PUMP 4", min = 0.0, max = 1.0;
            HeatingCircuitPump5: 2529, UA, "", "HEATING CIRCUIT PUMP 5", min = 0.0, max = 1.0;
            BufferChargingPump3: 2530, UA, "", "BUFFER CHARGING PUMP 3", min = 0.0, max = 1.0;
            BufferChargingPump4: 2531, UA, "", "BUFFER CHARGING PUMP 4", min = 0.0, max = 1.0;
            BufferChargingPump5: 2532, UA, "", "BUFFER CHARGING PUMP 5", min = 0.0, max = 1.0;
            BufferChargingPump6: 2533, UA, "", "BUFFER CHARGING PUMP 6", min = 0.0, max = 1.0;
            DiffControllerPump1: 2534, UA, "", "DIFF CONTROLLER PUMP 1", min = 0.0, max = 1.0;
            DiffControllerPump2: 2535, UA, "", "DIFF CONTROLLER PUMP 2", min = 0.0, max = 1.0;
            PoolPumpPrimary: 2536, UA, "", "POOL PUMP PRIMARY", min = 0.0, max = 1.0;
            PoolPumpSecondary: 2537, UA, "", "POOL PUMP SECONDARY", min = 0.0, max = 1.0;
            MixerOpenHk4: 2538, UA, "", "MIXER OPEN HC4", min = 0.0, max = 1.0;
            MixerCloseHk4: 2539, UA, "", "MIXER CLOSE HC4", min = 0.0, max = 1.0;
            MixerOpenHk5: 2540, UA, "", "MIXER OPEN HC5", min = 0.0, max = 1.0;
            MixerCloseHk5: 2541, UA, "", "MIXER CLOSE HC5", min = 0.0, max = 1.0;
            Compressor1: 2542, UA, "", "COMPRESSOR 1", min = 0.0, max = 1.0;
            Compressor2: 2543, UA, "", "COMPRESSOR 2", min = 0.0, max = 1.0;
            Compressor3: 2544, UA, "", "COMPRESSOR 3", min = 0.0, max = 1.0;
            Compressor4: 2545, UA, "", "COMPRESSOR 4", min = 0.0, max = 1.0;
            Compressor5: 2546, UA, "", "COMPRESSOR 5", min = 0.0, max = 1.0;
            Compressor6: 2547, UA, "", "COMPRESSOR 6", min = 0.0, max = 1.0;
        },
    },
    Section {
        name: "Energy Data",
        kind: RegisterKind::Input,
        registers: registers! {
            ProducedHeatingToday: 3501, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ProducedHeatingTotalLow: 3502, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ProducedHeatingTotalHigh: 3503, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ProducedWaterHeatingToday: 3504, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTotalLow: 3505, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ProducedWaterHeatingTotalHigh: 3506, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            ProducedBoosterHeatingTotalLow: 3507, UA, "kWh", "NHZ HEATING TOTAL", min = 0.0, max = 999.0;
            ProducedBoosterHeatingTotalHigh: 3508, UA, "MWh", "NHZ HEATING TOTAL", min = 0.0, max = 65535.0;
            ProducedBoosterWaterHeatingTotalLow: 3509, UA, "kWh", "NHZ DHW TOTAL", min = 0.0, max = 999.0;
            ProducedBoosterWaterHeatingTotalHigh: 3510, UA, "MWh", "NHZ DHW TOTAL", min = 0.0, max = 65535.0;
            ConsumedHeatingToday: 3511, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ConsumedHeatingTotalLow: 3512, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ConsumedHeatingTotalHigh: 3513, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingToday: 3514, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTotalLow: 3515, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ConsumedWaterHeatingTotalHigh: 3516, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            CompressorHeatingHours: 3517, UA, "h", "VD HEATING", min = 0.0, max = 999.0;
            CompressorWaterHeatingHours: 3518, UA, "h", "VD DHW", min = 0.0, max = 999.0;
            CompressorCoolingHours: 3519, UA, "h", "VD COOLING", min = 0.0, max = 999.0;
            BoosterStage1Hours: 3520, UA, "h", "NHZ 1", min = 0.0, max = 999.0;
            BoosterStage2Hours: 3521, UA, "h", "NHZ 2", min = 0.0, max = 999.0;
            BoosterStage12Hours: 3522, UA, "h", "NHZ 1_2", min = 0.0, max = 999.0;
            ProducedHeatingTodayHp1: 3523, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ProducedHeatingTotalLowHp1: 3524, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ProducedHeatingTotalHighHp1: 3525, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTodayHp1: 3526, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTotalLowHp1: 3527, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ProducedWaterHeatingTotalHighHp1: 3528, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            ProducedBoosterHeatingTotalLowHp1: 3529, UA, "kWh", "NHZ HEATING TOTAL", min = 0.0, max = 999.0;
            ProducedBoosterHeatingTotalHighHp1: 3530, UA, "MWh", "NHZ HEATING TOTAL", min = 0.0, max = 65535.0;
            ProducedBoosterWaterHeatingTotalLowHp1: 3531, UA, "kWh", "NHZ DHW TOTAL", min = 0.0, max = 999.0;
            ProducedBoosterWaterHeatingTotalHighHp1: 3532, UA, "MWh", "NHZ DHW TOTAL", min = 0.0, max = 65535.0;
            ConsumedHeatingTodayHp1: 3533, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ConsumedHeatingTotalLowHp1: 3534, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ConsumedHeatingTotalHighHp1: 3535, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTodayHp1: 3536, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTotalLowHp1: 3537, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ConsumedWaterHeatingTotalHighHp1: 3538, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            Compressor1HeatingHoursHp1: 3539, UA, "h", "VD 1 HEATING";
            Compressor2HeatingHoursHp1: 3540, UA, "h", "VD 2 HEATING";
            Compressor12HeatingHoursHp1: 3541, UA, "h", "VD 1_2 HEATING";
            Compressor1WaterHeatingHoursHp1: 3542, UA, "h", "VD 1 DHW";
            Compressor2WaterHeatingHoursHp1: 3543, UA, "h", "VD 2 DHW";
            Compressor12WaterHeatingHoursHp1: 3544, UA, "h", "VD 1_2 DHW";
            CompressorCoolingHoursHp1: 3545, UA, "h", "VD COOLING x";
            BoosterStage1ReheatingHours: 3546, UA, "h", "NHZ 1";
            BoosterStage2ReheatingHours: 3547, UA, "h", "NHZ 2";
            BoosterStage12ReheatingHours: 3548, UA, "h", "NHZ 1_2";
            ProducedHeatingTodayHp2: 3549, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ProducedHeatingTotalLowHp2: 3550, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ProducedHeatingTotalHighHp2: 3551, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTodayHp2: 3552, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTotalLowHp2: 3553, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ProducedWaterHeatingTotalHighHp2: 3554, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            ConsumedHeatingTodayHp2: 3555, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ConsumedHeatingTotalLowHp2: 3556, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ConsumedHeatingTotalHighHp2: 3557, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTodayHp2: 3558, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTotalLowHp2: 3559, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ConsumedWaterHeatingTotalHighHp2: 3560, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            Compressor1HeatingHoursHp2: 3561, UA, "h", "VD 1 HEATING";
            Compressor2HeatingHoursHp2: 3562, UA, "h", "VD 2 HEATING";
            Compressor12HeatingHoursHp2: 3563, UA, "h", "VD 1_2 HEATING";
            Compressor1WaterHeatingHoursHp2: 3564, UA, "h", "VD 1 DHW";
            Compressor2WaterHeatingHoursHp2: 3565, UA, "h", "VD 2 DHW";
            Compressor12WaterHeatingHoursHp2: 3566, UA, "h", "VD 1_2 DHW";
            CompressorCoolingHoursHp2: 3567, UA, "h", "VD COOLING";
            ProducedHeatingTodayHp3: 3568, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ProducedHeatingTotalLowHp3: 3569, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ProducedHeatingTotalHighHp3: 3570, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTodayHp3: 3571, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ProducedWaterHeatingTotalLowHp3: 3572, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ProducedWaterHeatingTotalHighHp3: 3573, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            ConsumedHeatingTodayHp3: 3574, UA, "kWh", "VD HEATING DAY", min = 0.0, max = 65535.0;
            ConsumedHeatingTotalLowHp3: 3575, UA, "kWh", "VD HEATING TOTAL", min = 0.0, max = 999.0;
            ConsumedHeatingTotalHighHp3: 3576, UA, "MWh", "VD HEATING TOTAL", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTodayHp3: 3577, UA, "kWh", "VD DHW DAY", min = 0.0, max = 65535.0;
            ConsumedWaterHeatingTotalLowHp3: 3578, UA, "kWh", "VD DHW TOTAL", min = 0.0, max = 999.0;
            ConsumedWaterHeatingTotalHighHp3: 3579, UA, "MWh", "VD DHW TOTAL", min = 0.0, max = 65535.0;
            Compressor1HeatingHoursHp3: 3580, UA, "h", "VD 1 HEATING";
            Compressor2HeatingHoursHp3: 3581, UA, "h", "VD 2 HEATING";
            Compressor12HeatingHoursHp3: 3582, UA, "h", "VD 1_2 HEATING";
            Compressor1WaterHeatingHoursHp3: 3583, UA, "h", "VD 1 DHW";
            Compressor2WaterHeatingHoursHp3: 3584, UA, "h", "VD 2 DHW";
            Compressor12WaterHeatingHoursHp3: 3585, UA, "h", "VD 1_2 DHW";
            CompressorCoolingHoursHp3: 3586, UA, "h", "VD COOLING";
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
    ConsumedHeatingTotal = split(ConsumedHeatingTotalLow, ConsumedHeatingTotalHigh), "kWh";
    ConsumedHeatingLifetime = lifetime(ConsumedHeatingToday, ConsumedHeatingTotalLow, ConsumedHeatingTotalHigh), "kWh";
    ConsumedWaterHeatingTotal = split(ConsumedWaterHeatingTotalLow, ConsumedWaterHeatingTotalHigh), "kWh";
    ConsumedWaterHeatingLifetime = lifetime(ConsumedWaterHeatingToday, ConsumedWaterHeatingTotalLow, ConsumedWaterHeatingTotalHigh), "kWh";
    ProducedHeatingTotalHp1 = split(ProducedHeatingTotalLowHp1, ProducedHeatingTotalHighHp1), "kWh";
    ProducedHeatingLifetimeHp1 = lifetime(ProducedHeatingTodayHp1, ProducedHeatingTotalLowHp1, ProducedHeatingTotalHighHp1), "kWh";
    ProducedWaterHeatingTotalHp1 = split(ProducedWaterHeatingTotalLowHp1, ProducedWaterHeatingTotalHighHp1), "kWh";
    ProducedWaterHeatingLifetimeHp1 = lifetime(ProducedWaterHeatingTodayHp1, ProducedWaterHeatingTotalLowHp1, ProducedWaterHeatingTotalHighHp1), "kWh";
    ProducedBoosterHeatingTotalHp1 = split(ProducedBoosterHeatingTotalLowHp1, ProducedBoosterHeatingTotalHighHp1), "kWh";
    ProducedBoosterWaterHeatingTotalHp1 = split(ProducedBoosterWaterHeatingTotalLowHp1, ProducedBoosterWaterHeatingTotalHighHp1), "kWh";
    ConsumedHeatingTotalHp1 = split(ConsumedHeatingTotalLowHp1, ConsumedHeatingTotalHighHp1), "kWh";
    ConsumedHeatingLifetimeHp1 = lifetime(ConsumedHeatingTodayHp1, ConsumedHeatingTotalLowHp1, ConsumedHeatingTotalHighHp1), "kWh";
    ConsumedWaterHeatingTotalHp1 = split(ConsumedWaterHeatingTotalLowHp1, ConsumedWaterHeatingTotalHighHp1), "kWh";
    ConsumedWaterHeatingLifetimeHp1 = lifetime(ConsumedWaterHeatingTodayHp1, ConsumedWaterHeatingTotalLowHp1, ConsumedWaterHeatingTotalHighHp1), "kWh";
    ProducedHeatingTotalHp2 = split(ProducedHeatingTotalLowHp2, ProducedHeatingTotalHighHp2), "kWh";
    ProducedHeatingLifetimeHp2 = lifetime(ProducedHeatingTodayHp2, ProducedHeatingTotalLowHp2, ProducedHeatingTotalHighHp2), "kWh";
    ProducedWaterHeatingTotalHp2 = split(ProducedWaterHeatingTotalLowHp2, ProducedWaterHeatingTotalHighHp2), "kWh";
    ProducedWaterHeatingLifetimeHp2 = lifetime(ProducedWaterHeatingTodayHp2, ProducedWaterHeatingTotalLowHp2, ProducedWaterHeatingTotalHighHp2), "kWh";
    ConsumedHeatingTotalHp2 = split(ConsumedHeatingTotalLowHp2, ConsumedHeatingTotalHighHp2), "kWh";
    ConsumedHeatingLifetimeHp2 = lifetime(ConsumedHeatingTodayHp2, ConsumedHeatingTotalLowHp2, ConsumedHeatingTotalHighHp2), "kWh";
    ConsumedWaterHeatingTotalHp2 = split(ConsumedWaterHeatingTotalLowHp2, ConsumedWaterHeatingTotalHighHp2), "kWh";
    ConsumedWaterHeatingLifetimeHp2 = lifetime(ConsumedWaterHeatingTodayHp2, ConsumedWaterHeatingTotalLowHp2, ConsumedWaterHeatingTotalHighHp2), "kWh";
    ProducedHeatingTotalHp3 = split(ProducedHeatingTotalLowHp3, ProducedHeatingTotalHighHp3), "kWh";
    ProducedHeatingLifetimeHp3 = lifetime(ProducedHeatingTodayHp3, ProducedHeatingTotalLowHp3, ProducedHeatingTotalHighHp3), "kWh";
    ProducedWaterHeatingTotalHp3 = split(ProducedWaterHeatingTotalLowHp3, ProducedWaterHeatingTotalHighHp3), "kWh";
    ProducedWaterHeatingLifetimeHp3 = lifetime(ProducedWaterHeatingTodayHp3, ProducedWaterHeatingTotalLowHp3, ProducedWaterHeatingTotalHighHp3), "kWh";
    ConsumedHeatingTotalHp3 = split(ConsumedHeatingTotalLowHp3, ConsumedHeatingTotalHighHp3), "kWh";
    ConsumedHeatingLifetimeHp3 = lifetime(ConsumedHeatingTodayHp3, ConsumedHeatingTotalLowHp3, ConsumedHeatingTotalHighHp3), "kWh";
    ConsumedWaterHeatingTotalHp3 = split(ConsumedWaterHeatingTotalLowHp3, ConsumedWaterHeatingTotalHighHp3), "kWh";
    ConsumedWaterHeatingLifetimeHp3 = lifetime(ConsumedWaterHeatingTodayHp3, ConsumedWaterHeatingTotalLowHp3, ConsumedWaterHeatingTotalHighHp3), "kWh";
};
