//! Profile tables exported from the FIT SDK Profile spreadsheet.
//!
//! Generated by `profgen` against FIT SDK profile version 21.x — do not edit
//! by hand, regenerate instead. Messages are sorted by global message
//! number and type value tables by value; lookups rely on both orderings.

use crate::profile::{Component, FieldInfo, Kind, MessageInfo, Subfield, SubfieldRef, TypeInfo};
use crate::wire::base_type::BaseType;

#[rustfmt::skip]
pub static FILE: TypeInfo = TypeInfo { name: "file", base: BaseType::Enum, values: &[
    (1, "device"), (2, "settings"), (3, "sport"), (4, "activity"), (5, "workout"),
    (6, "course"), (7, "schedules"), (9, "weight"), (10, "totals"), (11, "goals"),
    (14, "blood_pressure"), (15, "monitoring_a"), (20, "activity_summary"),
    (28, "monitoring_daily"), (32, "monitoring_b"), (34, "segment"), (35, "segment_list"),
] };

#[rustfmt::skip]
pub static MANUFACTURER: TypeInfo = TypeInfo { name: "manufacturer", base: BaseType::UInt16, values: &[
    (1, "garmin"), (2, "garmin_fr405_antfs"), (3, "zephyr"), (4, "dayton"), (5, "idt"),
    (6, "srm"), (7, "quarq"), (8, "ibike"), (9, "saris"), (10, "spark_hk"),
    (11, "tanita"), (12, "echowell"), (13, "dynastream_oem"), (14, "nautilus"),
    (15, "dynastream"), (16, "timex"), (23, "suunto"), (32, "wahoo_fitness"),
    (38, "sigmasport"), (63, "specialized"), (89, "tacx"), (255, "development"),
    (260, "zwift"), (265, "strava"), (267, "bryton"), (282, "hammerhead"),
] };

#[rustfmt::skip]
pub static GARMIN_PRODUCT: TypeInfo = TypeInfo { name: "garmin_product", base: BaseType::UInt16, values: &[
    (1, "hrm1"), (2, "axh01"), (3, "axb01"), (4, "axb02"), (5, "hrm2ss"),
    (6, "dsi_alf02"), (1036, "edge500"), (1124, "fr110"), (1169, "edge800"),
    (1328, "fr910xt"), (1561, "edge510"), (1567, "edge810"), (1623, "fr620"),
    (1632, "fr220"), (1765, "fr920xt"), (2050, "fenix3"), (2067, "edge520"),
    (2337, "vivoactive_hr"), (2697, "fenix5"), (3121, "edge530"), (3122, "edge830"),
] };

#[rustfmt::skip]
pub static SPORT: TypeInfo = TypeInfo { name: "sport", base: BaseType::Enum, values: &[
    (0, "generic"), (1, "running"), (2, "cycling"), (3, "transition"),
    (4, "fitness_equipment"), (5, "swimming"), (6, "basketball"), (7, "soccer"),
    (8, "tennis"), (9, "american_football"), (10, "training"), (11, "walking"),
    (13, "hiking"), (254, "all"),
] };

#[rustfmt::skip]
pub static SUB_SPORT: TypeInfo = TypeInfo { name: "sub_sport", base: BaseType::Enum, values: &[
    (0, "generic"), (1, "treadmill"), (2, "street"), (3, "trail"), (6, "indoor_cycling"),
    (7, "road"), (8, "mountain"), (11, "cyclocross"), (254, "all"),
] };

#[rustfmt::skip]
pub static EVENT: TypeInfo = TypeInfo { name: "event", base: BaseType::Enum, values: &[
    (0, "timer"), (3, "workout"), (4, "workout_step"), (5, "power_down"),
    (6, "power_up"), (7, "off_course"), (8, "session"), (9, "lap"),
    (10, "course_point"), (11, "battery"), (12, "virtual_partner_pace"),
    (13, "hr_high_alert"), (14, "hr_low_alert"), (21, "recovery_hr"),
    (22, "battery_level"), (23, "time_duration_alert"), (24, "distance_duration_alert"),
    (26, "calorie_duration_alert"), (27, "activity"), (28, "fitness_equipment"),
    (36, "calibration"), (42, "front_gear_change"), (43, "rear_gear_change"),
    (44, "rider_position_change"), (45, "elev_high_alert"), (46, "elev_low_alert"),
    (54, "comm_timeout"),
] };

#[rustfmt::skip]
pub static EVENT_TYPE: TypeInfo = TypeInfo { name: "event_type", base: BaseType::Enum, values: &[
    (0, "start"), (1, "stop"), (2, "consecutive_depreciated"), (3, "marker"),
    (4, "stop_all"), (5, "begin_depreciated"), (6, "end_depreciated"),
    (7, "end_all_depreciated"), (8, "stop_disable"), (9, "stop_disable_all"),
] };

#[rustfmt::skip]
pub static TIMER_TRIGGER: TypeInfo = TypeInfo { name: "timer_trigger", base: BaseType::Enum, values: &[
    (0, "manual"), (1, "auto"), (2, "fitness_equipment"),
] };

#[rustfmt::skip]
pub static SESSION_TRIGGER: TypeInfo = TypeInfo { name: "session_trigger", base: BaseType::Enum, values: &[
    (0, "activity_end"), (1, "manual"), (2, "auto_multi_sport"), (3, "fitness_equipment"),
] };

#[rustfmt::skip]
pub static LAP_TRIGGER: TypeInfo = TypeInfo { name: "lap_trigger", base: BaseType::Enum, values: &[
    (0, "manual"), (1, "time"), (2, "distance"), (3, "position_start"),
    (4, "position_lap"), (5, "position_waypoint"), (6, "position_marked"),
    (7, "session_end"), (8, "fitness_equipment"),
] };

#[rustfmt::skip]
pub static BATTERY_STATUS: TypeInfo = TypeInfo { name: "battery_status", base: BaseType::UInt8, values: &[
    (1, "new"), (2, "good"), (3, "ok"), (4, "low"), (5, "critical"),
    (6, "charging"), (7, "unknown"),
] };

#[rustfmt::skip]
pub static ACTIVITY: TypeInfo = TypeInfo { name: "activity", base: BaseType::Enum, values: &[
    (0, "manual"), (1, "auto_multi_sport"),
] };

#[rustfmt::skip]
pub static DEVICE_INDEX: TypeInfo = TypeInfo { name: "device_index", base: BaseType::UInt8, values: &[
    (0, "creator"),
] };

pub static DATE_TIME: TypeInfo = TypeInfo { name: "date_time", base: BaseType::UInt32, values: &[] };

pub static LOCAL_DATE_TIME: TypeInfo = TypeInfo { name: "local_date_time", base: BaseType::UInt32, values: &[] };

pub static MESSAGE_INDEX: TypeInfo = TypeInfo { name: "message_index", base: BaseType::UInt16, values: &[] };

#[rustfmt::skip]
pub static FIT_BASE_TYPE: TypeInfo = TypeInfo { name: "fit_base_type", base: BaseType::UInt8, values: &[
    (0, "enum"), (1, "sint8"), (2, "uint8"), (7, "string"), (10, "uint8z"),
    (13, "byte"), (131, "sint16"), (132, "uint16"), (133, "sint32"), (134, "uint32"),
    (136, "float32"), (137, "float64"), (139, "uint16z"), (140, "uint32z"),
    (142, "sint64"), (143, "uint64"), (144, "uint64z"),
] };

/// Every named type, for name-keyed lookups.
pub static TYPES: &[&TypeInfo] = &[
    &FILE,
    &MANUFACTURER,
    &GARMIN_PRODUCT,
    &SPORT,
    &SUB_SPORT,
    &EVENT,
    &EVENT_TYPE,
    &TIMER_TRIGGER,
    &SESSION_TRIGGER,
    &LAP_TRIGGER,
    &BATTERY_STATUS,
    &ACTIVITY,
    &DEVICE_INDEX,
    &DATE_TIME,
    &LOCAL_DATE_TIME,
    &MESSAGE_INDEX,
    &FIT_BASE_TYPE,
];

#[rustfmt::skip]
pub static MESSAGES: &[MessageInfo] = &[
    MessageInfo { num: 0, name: "file_id", fields: &[
        FieldInfo { num: 0, name: "type", kind: Kind::Type(&FILE), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "manufacturer", kind: Kind::Type(&MANUFACTURER), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "product", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[
            Subfield { name: "garmin_product", kind: Kind::Type(&GARMIN_PRODUCT), scale: 1.0, offset: 0.0, units: None, components: &[], refs: &[
                SubfieldRef { field: 1, value: 1 },
                SubfieldRef { field: 1, value: 13 },
                SubfieldRef { field: 1, value: 15 },
            ] },
        ] },
        FieldInfo { num: 3, name: "serial_number", kind: Kind::Base(BaseType::UInt32Z), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "time_created", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 5, name: "number", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 8, name: "product_name", kind: Kind::Base(BaseType::String), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 18, name: "session", fields: &[
        FieldInfo { num: 0, name: "event", kind: Kind::Type(&EVENT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "event_type", kind: Kind::Type(&EVENT_TYPE), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "start_time", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 3, name: "start_position_lat", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "start_position_long", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 5, name: "sport", kind: Kind::Type(&SPORT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 6, name: "sub_sport", kind: Kind::Type(&SUB_SPORT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 7, name: "total_elapsed_time", kind: Kind::Base(BaseType::UInt32), scale: 1000.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 8, name: "total_timer_time", kind: Kind::Base(BaseType::UInt32), scale: 1000.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 9, name: "total_distance", kind: Kind::Base(BaseType::UInt32), scale: 100.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 10, name: "total_cycles", kind: Kind::Base(BaseType::UInt32), scale: 1.0, offset: 0.0, units: Some("cycles"), components: &[], subfields: &[] },
        FieldInfo { num: 11, name: "total_calories", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("kcal"), components: &[], subfields: &[] },
        FieldInfo { num: 14, name: "avg_speed", kind: Kind::Base(BaseType::UInt16), scale: 1000.0, offset: 0.0, units: Some("m/s"), components: &[], subfields: &[] },
        FieldInfo { num: 15, name: "max_speed", kind: Kind::Base(BaseType::UInt16), scale: 1000.0, offset: 0.0, units: Some("m/s"), components: &[], subfields: &[] },
        FieldInfo { num: 16, name: "avg_heart_rate", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("bpm"), components: &[], subfields: &[] },
        FieldInfo { num: 17, name: "max_heart_rate", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("bpm"), components: &[], subfields: &[] },
        FieldInfo { num: 18, name: "avg_cadence", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("rpm"), components: &[], subfields: &[] },
        FieldInfo { num: 19, name: "max_cadence", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("rpm"), components: &[], subfields: &[] },
        FieldInfo { num: 20, name: "avg_power", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("watts"), components: &[], subfields: &[] },
        FieldInfo { num: 21, name: "max_power", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("watts"), components: &[], subfields: &[] },
        FieldInfo { num: 22, name: "total_ascent", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 23, name: "total_descent", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 25, name: "first_lap_index", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 26, name: "num_laps", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 28, name: "trigger", kind: Kind::Type(&SESSION_TRIGGER), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 254, name: "message_index", kind: Kind::Type(&MESSAGE_INDEX), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 19, name: "lap", fields: &[
        FieldInfo { num: 0, name: "event", kind: Kind::Type(&EVENT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "event_type", kind: Kind::Type(&EVENT_TYPE), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "start_time", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 3, name: "start_position_lat", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "start_position_long", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 5, name: "end_position_lat", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 6, name: "end_position_long", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 7, name: "total_elapsed_time", kind: Kind::Base(BaseType::UInt32), scale: 1000.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 8, name: "total_timer_time", kind: Kind::Base(BaseType::UInt32), scale: 1000.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 9, name: "total_distance", kind: Kind::Base(BaseType::UInt32), scale: 100.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 10, name: "total_cycles", kind: Kind::Base(BaseType::UInt32), scale: 1.0, offset: 0.0, units: Some("cycles"), components: &[], subfields: &[] },
        FieldInfo { num: 11, name: "total_calories", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("kcal"), components: &[], subfields: &[] },
        FieldInfo { num: 13, name: "avg_speed", kind: Kind::Base(BaseType::UInt16), scale: 1000.0, offset: 0.0, units: Some("m/s"), components: &[], subfields: &[] },
        FieldInfo { num: 14, name: "max_speed", kind: Kind::Base(BaseType::UInt16), scale: 1000.0, offset: 0.0, units: Some("m/s"), components: &[], subfields: &[] },
        FieldInfo { num: 15, name: "avg_heart_rate", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("bpm"), components: &[], subfields: &[] },
        FieldInfo { num: 16, name: "max_heart_rate", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("bpm"), components: &[], subfields: &[] },
        FieldInfo { num: 17, name: "avg_cadence", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("rpm"), components: &[], subfields: &[] },
        FieldInfo { num: 18, name: "max_cadence", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("rpm"), components: &[], subfields: &[] },
        FieldInfo { num: 19, name: "avg_power", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("watts"), components: &[], subfields: &[] },
        FieldInfo { num: 20, name: "max_power", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("watts"), components: &[], subfields: &[] },
        FieldInfo { num: 21, name: "total_ascent", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 22, name: "total_descent", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 24, name: "lap_trigger", kind: Kind::Type(&LAP_TRIGGER), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 25, name: "sport", kind: Kind::Type(&SPORT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 254, name: "message_index", kind: Kind::Type(&MESSAGE_INDEX), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 20, name: "record", fields: &[
        FieldInfo { num: 0, name: "position_lat", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "position_long", kind: Kind::Base(BaseType::SInt32), scale: 1.0, offset: 0.0, units: Some("semicircles"), components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "altitude", kind: Kind::Base(BaseType::UInt16), scale: 5.0, offset: 500.0, units: Some("m"), components: &[
            Component { field: 78, bits: 16, scale: 5.0, offset: 500.0, units: Some("m"), accumulate: false },
        ], subfields: &[] },
        FieldInfo { num: 3, name: "heart_rate", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("bpm"), components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "cadence", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("rpm"), components: &[], subfields: &[] },
        FieldInfo { num: 5, name: "distance", kind: Kind::Base(BaseType::UInt32), scale: 100.0, offset: 0.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 6, name: "speed", kind: Kind::Base(BaseType::UInt16), scale: 1000.0, offset: 0.0, units: Some("m/s"), components: &[
            Component { field: 73, bits: 16, scale: 1000.0, offset: 0.0, units: Some("m/s"), accumulate: false },
        ], subfields: &[] },
        FieldInfo { num: 7, name: "power", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: Some("watts"), components: &[], subfields: &[] },
        FieldInfo { num: 8, name: "compressed_speed_distance", kind: Kind::Base(BaseType::Byte), scale: 1.0, offset: 0.0, units: None, components: &[
            Component { field: 6, bits: 12, scale: 100.0, offset: 0.0, units: Some("m/s"), accumulate: false },
            Component { field: 5, bits: 12, scale: 16.0, offset: 0.0, units: Some("m"), accumulate: true },
        ], subfields: &[] },
        FieldInfo { num: 9, name: "grade", kind: Kind::Base(BaseType::SInt16), scale: 100.0, offset: 0.0, units: Some("%"), components: &[], subfields: &[] },
        FieldInfo { num: 13, name: "temperature", kind: Kind::Base(BaseType::SInt8), scale: 1.0, offset: 0.0, units: Some("C"), components: &[], subfields: &[] },
        FieldInfo { num: 29, name: "accumulated_power", kind: Kind::Base(BaseType::UInt32), scale: 1.0, offset: 0.0, units: Some("watts"), components: &[], subfields: &[] },
        FieldInfo { num: 53, name: "fractional_cadence", kind: Kind::Base(BaseType::UInt8), scale: 128.0, offset: 0.0, units: Some("rpm"), components: &[], subfields: &[] },
        FieldInfo { num: 73, name: "enhanced_speed", kind: Kind::Base(BaseType::UInt32), scale: 1000.0, offset: 0.0, units: Some("m/s"), components: &[], subfields: &[] },
        FieldInfo { num: 78, name: "enhanced_altitude", kind: Kind::Base(BaseType::UInt32), scale: 5.0, offset: 500.0, units: Some("m"), components: &[], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 21, name: "event", fields: &[
        FieldInfo { num: 0, name: "event", kind: Kind::Type(&EVENT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "event_type", kind: Kind::Type(&EVENT_TYPE), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "data16", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[
            Component { field: 3, bits: 16, scale: 1.0, offset: 0.0, units: None, accumulate: false },
        ], subfields: &[] },
        FieldInfo { num: 3, name: "data", kind: Kind::Base(BaseType::UInt32), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[
            Subfield { name: "timer_trigger", kind: Kind::Type(&TIMER_TRIGGER), scale: 1.0, offset: 0.0, units: None, components: &[], refs: &[
                SubfieldRef { field: 0, value: 0 },
            ] },
            Subfield { name: "course_point_index", kind: Kind::Type(&MESSAGE_INDEX), scale: 1.0, offset: 0.0, units: None, components: &[], refs: &[
                SubfieldRef { field: 0, value: 10 },
            ] },
            Subfield { name: "battery_level", kind: Kind::Base(BaseType::UInt16), scale: 1000.0, offset: 0.0, units: Some("V"), components: &[], refs: &[
                SubfieldRef { field: 0, value: 11 },
            ] },
        ] },
        FieldInfo { num: 4, name: "event_group", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 23, name: "device_info", fields: &[
        FieldInfo { num: 0, name: "device_index", kind: Kind::Type(&DEVICE_INDEX), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "device_type", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "manufacturer", kind: Kind::Type(&MANUFACTURER), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 3, name: "serial_number", kind: Kind::Base(BaseType::UInt32Z), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "product", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[
            Subfield { name: "garmin_product", kind: Kind::Type(&GARMIN_PRODUCT), scale: 1.0, offset: 0.0, units: None, components: &[], refs: &[
                SubfieldRef { field: 2, value: 1 },
                SubfieldRef { field: 2, value: 13 },
                SubfieldRef { field: 2, value: 15 },
            ] },
        ] },
        FieldInfo { num: 5, name: "software_version", kind: Kind::Base(BaseType::UInt16), scale: 100.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 6, name: "hardware_version", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 10, name: "battery_voltage", kind: Kind::Base(BaseType::UInt16), scale: 256.0, offset: 0.0, units: Some("V"), components: &[], subfields: &[] },
        FieldInfo { num: 11, name: "battery_status", kind: Kind::Type(&BATTERY_STATUS), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 34, name: "activity", fields: &[
        FieldInfo { num: 0, name: "total_timer_time", kind: Kind::Base(BaseType::UInt32), scale: 1000.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "num_sessions", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "type", kind: Kind::Type(&ACTIVITY), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 3, name: "event", kind: Kind::Type(&EVENT), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "event_type", kind: Kind::Type(&EVENT_TYPE), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 5, name: "local_timestamp", kind: Kind::Type(&LOCAL_DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 6, name: "event_group", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 132, name: "hr", fields: &[
        FieldInfo { num: 0, name: "fractional_timestamp", kind: Kind::Base(BaseType::UInt16), scale: 32768.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "time256", kind: Kind::Base(BaseType::UInt8), scale: 256.0, offset: 0.0, units: Some("s"), components: &[
            Component { field: 0, bits: 8, scale: 256.0, offset: 0.0, units: Some("s"), accumulate: false },
        ], subfields: &[] },
        FieldInfo { num: 6, name: "filtered_bpm", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: Some("bpm"), components: &[], subfields: &[] },
        FieldInfo { num: 9, name: "event_timestamp", kind: Kind::Base(BaseType::UInt32), scale: 1024.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
        FieldInfo { num: 10, name: "event_timestamp_12", kind: Kind::Base(BaseType::Byte), scale: 1.0, offset: 0.0, units: None, components: &[
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
            Component { field: 9, bits: 12, scale: 1024.0, offset: 0.0, units: Some("s"), accumulate: true },
        ], subfields: &[] },
        FieldInfo { num: 253, name: "timestamp", kind: Kind::Type(&DATE_TIME), scale: 1.0, offset: 0.0, units: Some("s"), components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 206, name: "field_description", fields: &[
        FieldInfo { num: 0, name: "developer_data_index", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "field_definition_number", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "fit_base_type_id", kind: Kind::Type(&FIT_BASE_TYPE), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 3, name: "field_name", kind: Kind::Base(BaseType::String), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 6, name: "scale", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 7, name: "offset", kind: Kind::Base(BaseType::SInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 8, name: "units", kind: Kind::Base(BaseType::String), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 14, name: "native_mesg_num", kind: Kind::Base(BaseType::UInt16), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 15, name: "native_field_num", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
    ] },
    MessageInfo { num: 207, name: "developer_data_id", fields: &[
        FieldInfo { num: 0, name: "developer_id", kind: Kind::Base(BaseType::Byte), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 1, name: "application_id", kind: Kind::Base(BaseType::Byte), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 2, name: "manufacturer_id", kind: Kind::Type(&MANUFACTURER), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 3, name: "developer_data_index", kind: Kind::Base(BaseType::UInt8), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
        FieldInfo { num: 4, name: "application_version", kind: Kind::Base(BaseType::UInt32), scale: 1.0, offset: 0.0, units: None, components: &[], subfields: &[] },
    ] },
];
