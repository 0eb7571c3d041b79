//! Resolution of raw field values into named, typed, scaled fields.
//!
//! Expansion runs per data record: subfields are matched against sibling
//! values, component fields are split out of their source's bit stream,
//! enum values pick up their canonical names, and scale/offset turn raw
//! integers into engineering units. The [`ExpandState`] carries everything
//! that survives across records: component accumulators, the compressed
//! timestamp reference, and developer field descriptions.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::warn;

use crate::message::{DataMessage, FieldValue, Value};
use crate::profile::{self, Component, FieldInfo, Kind, Subfield};
use crate::wire::base_type::BaseType;
use crate::wire::data::parse_field;
use crate::wire::definition::{DevFieldDef, FieldDef, LocalDefinition};

/// A raw field: its definition entry and parsed value.
pub(crate) struct RawField {
    pub def: FieldDef,
    pub value: Option<Value>,
}

/// A developer field schema captured from a `field_description` message.
struct DevFieldInfo {
    name: String,
    base: BaseType,
    scale: Option<f64>,
    offset: Option<f64>,
    units: Option<String>,
}

/// Cross-record state the expander maintains for one file.
#[derive(Default)]
pub(crate) struct ExpandState {
    /// Rolling high-bit registers for accumulated components, keyed by
    /// (global message number, target field number).
    accumulators: HashMap<(u16, u8), u64>,
    /// Reference timestamp for compressed-timestamp headers.
    timestamp: u32,
    /// Developer field schemas, keyed by (developer data index, field
    /// definition number).
    dev_fields: HashMap<(u8, u8), DevFieldInfo>,
}

impl ExpandState {
    /// Zero the accumulators for a definition's accumulating components.
    pub fn register_definition(&mut self, def: &LocalDefinition) {
        let Some(info) = profile::message(def.global) else {
            return;
        };
        for fd in &def.fields {
            let Some(field) = info.field(fd.number) else {
                continue;
            };
            for component in field.components {
                if component.accumulate {
                    self.accumulators.insert((def.global, component.field), 0);
                }
            }
        }
    }

    /// Capture a developer field schema from a `field_description` message.
    pub fn register_dev_metadata(&mut self, message: &DataMessage) {
        if message.num != profile::FIELD_DESCRIPTION {
            return;
        }

        let raw_u64 = |name: &str| {
            message
                .field(name)
                .and_then(|f| f.raw.as_ref())
                .and_then(Value::as_u64)
        };
        let string = |name: &str| match message.value(name) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };

        let (Some(index), Some(number), Some(base_code)) = (
            raw_u64("developer_data_index"),
            raw_u64("field_definition_number"),
            raw_u64("fit_base_type_id"),
        ) else {
            warn!("field description is missing its index, number, or base type");
            return;
        };
        let (index, number) = (index as u8, number as u8);

        self.dev_fields.insert(
            (index, number),
            DevFieldInfo {
                name: string("field_name")
                    .unwrap_or_else(|| format!("unknown_dev_{index}_{number}")),
                base: BaseType::from_code(base_code as u8),
                scale: raw_u64("scale").map(|v| v as f64),
                offset: raw_u64("offset").map(|v| v as f64),
                units: string("units"),
            },
        );
    }
}

/// A field schema with any matched subfield folded in.
struct FieldView {
    name: &'static str,
    kind: Kind,
    scale: f64,
    offset: f64,
    units: Option<&'static str>,
    components: &'static [Component],
}

impl From<&'static FieldInfo> for FieldView {
    fn from(field: &'static FieldInfo) -> Self {
        Self {
            name: field.name,
            kind: field.kind,
            scale: field.scale,
            offset: field.offset,
            units: field.units,
            components: field.components,
        }
    }
}

impl From<&'static Subfield> for FieldView {
    fn from(subfield: &'static Subfield) -> Self {
        Self {
            name: subfield.name,
            kind: subfield.kind,
            scale: subfield.scale,
            offset: subfield.offset,
            units: subfield.units,
            components: subfield.components,
        }
    }
}

/// Resolve one data record into a message.
pub(crate) fn resolve_message(
    def: &LocalDefinition,
    raw: Vec<RawField>,
    dev_raw: Vec<(DevFieldDef, Vec<u8>)>,
    time_offset: Option<u8>,
    state: &mut ExpandState,
) -> DataMessage {
    let info = profile::message(def.global);
    let name: Cow<'static, str> = match info {
        Some(m) => Cow::Borrowed(m.name),
        None => Cow::Owned(format!("unknown_{}", def.global)),
    };

    let mut fields = Vec::with_capacity(raw.len() + dev_raw.len() + 1);
    let mut has_timestamp = false;

    for rf in &raw {
        if rf.def.number == profile::TIMESTAMP_FIELD {
            has_timestamp = true;
            if let Some(v) = rf.value.as_ref().and_then(Value::as_u64) {
                state.timestamp = v as u32;
            }
        }

        match info.and_then(|m| m.field(rf.def.number)) {
            Some(field) => {
                let view = resolve_subfield(field, &raw);
                expand_components(def.global, &view, rf.value.as_ref(), &raw, state, &mut fields);

                let value = rf.value.clone().map(|v| {
                    let v = render(view.kind, v);
                    apply_scale_offset(v, view.scale, view.offset)
                });
                fields.push(FieldValue {
                    number: rf.def.number,
                    name: Cow::Borrowed(view.name),
                    type_name: view.kind.name(),
                    value,
                    raw: rf.value.clone(),
                    units: view.units.map(Cow::Borrowed),
                });
            }
            None => fields.push(unknown_field(rf)),
        }
    }

    if let Some(offset) = time_offset {
        if !has_timestamp {
            let reconstructed =
                apply_accumulation(u64::from(offset), u64::from(state.timestamp), 5) as u32;
            state.timestamp = reconstructed;
            fields.push(FieldValue {
                number: profile::TIMESTAMP_FIELD,
                name: Cow::Borrowed("timestamp"),
                type_name: "date_time",
                value: Some(Value::UInt32(reconstructed)),
                raw: Some(Value::UInt32(reconstructed)),
                units: Some(Cow::Borrowed("s")),
            });
        }
    }

    for (dd, bytes) in &dev_raw {
        fields.push(resolve_dev_field(dd, bytes, def.big_endian, state));
    }

    DataMessage {
        num: def.global,
        name,
        fields,
    }
}

/// Pick the first subfield whose reference predicate matches a sibling's
/// raw value, or fall back to the field itself.
fn resolve_subfield(field: &'static FieldInfo, raw: &[RawField]) -> FieldView {
    for subfield in field.subfields {
        for r in subfield.refs {
            let matched = raw.iter().any(|rf| {
                rf.def.number == r.field
                    && rf.value.as_ref().and_then(Value::as_u64) == Some(u64::from(r.value))
            });
            if matched {
                return FieldView::from(subfield);
            }
        }
    }
    FieldView::from(field)
}

/// Split a field's components out of its little-endian bit stream and emit
/// them as additional resolved fields.
fn expand_components(
    global: u16,
    view: &FieldView,
    source: Option<&Value>,
    raw: &[RawField],
    state: &mut ExpandState,
    out: &mut Vec<FieldValue>,
) {
    if view.components.is_empty() {
        return;
    }

    let stream = source.and_then(bit_source);
    let mut shift = 0u32;

    for component in view.components {
        let bits_value = stream.map(|s| {
            let mask = (1u128 << component.bits) - 1;
            ((s >> shift) & mask) as u64
        });
        shift += u32::from(component.bits);

        let mut cmp_raw = bits_value;
        if component.accumulate {
            if let Some(v) = cmp_raw {
                let register = state.accumulators.entry((global, component.field)).or_insert(0);
                let extended = apply_accumulation(v, *register, component.bits);
                *register = extended;
                cmp_raw = Some(extended);
            }
        }

        // The target field supplies the name and type; scale and offset
        // come from the component, which may disagree with the target's.
        let target = profile::message(global).and_then(|m| m.field(component.field));
        let (target_name, target_kind, target_units) = match target {
            Some(target) => {
                let target_view = resolve_subfield(target, raw);
                (
                    Cow::Borrowed(target_view.name),
                    target_view.kind,
                    target_view.units,
                )
            }
            None => (
                Cow::Owned(format!("unknown_{}", component.field)),
                Kind::Base(BaseType::UInt64),
                None,
            ),
        };

        let value = cmp_raw.map(|v| {
            let v = apply_scale_offset(Value::UInt64(v), component.scale, component.offset);
            render(target_kind, v)
        });

        out.push(FieldValue {
            number: component.field,
            name: target_name,
            type_name: target_kind.name(),
            value,
            raw: cmp_raw.map(Value::UInt64),
            units: component.units.or(target_units).map(Cow::Borrowed),
        });
    }
}

fn resolve_dev_field(
    dd: &DevFieldDef,
    bytes: &[u8],
    big_endian: bool,
    state: &ExpandState,
) -> FieldValue {
    match state.dev_fields.get(&(dd.developer_index, dd.number)) {
        Some(info) => {
            let raw = parse_field(bytes, info.base, big_endian);
            let value = raw.clone().map(|v| {
                apply_scale_offset(v, info.scale.unwrap_or(1.0), info.offset.unwrap_or(0.0))
            });
            FieldValue {
                number: dd.number,
                name: Cow::Owned(info.name.clone()),
                type_name: info.base.name(),
                value,
                raw,
                units: info.units.clone().map(Cow::Owned),
            }
        }
        None => {
            warn!(
                index = dd.developer_index,
                field = dd.number,
                "developer field has no descriptor"
            );
            let raw = parse_field(bytes, BaseType::Byte, big_endian);
            FieldValue {
                number: dd.number,
                name: Cow::Owned(format!("unknown_dev_{}_{}", dd.developer_index, dd.number)),
                type_name: "byte",
                value: raw.clone(),
                raw,
                units: None,
            }
        }
    }
}

fn unknown_field(rf: &RawField) -> FieldValue {
    FieldValue {
        number: rf.def.number,
        name: Cow::Owned(format!("unknown_{}", rf.def.number)),
        type_name: rf.def.base_type.name(),
        value: rf.value.clone(),
        raw: rf.value.clone(),
        units: None,
    }
}

/// Replace an integer with its canonical enum name, when the kind names one.
fn render(kind: Kind, value: Value) -> Value {
    if let Kind::Type(info) = kind {
        if let Some(v) = value.as_u64() {
            if let Some(name) = info.value_name(v) {
                return Value::Name(name);
            }
        }
    }
    value
}

/// `raw / scale - offset`, on numeric values only.
fn apply_scale_offset(value: Value, scale: f64, offset: f64) -> Value {
    if scale == 1.0 && offset == 0.0 {
        return value;
    }
    match value.as_f64() {
        Some(v) => Value::Float64(v / scale - offset),
        None => value,
    }
}

/// Extend a `bits`-wide reading with the rolling high bits of a previous
/// accumulation, wrapping within the bit width.
pub(crate) fn apply_accumulation(value: u64, accumulation: u64, bits: u8) -> u64 {
    let max = 1u64 << bits;
    let mask = max - 1;
    let mut base = value + (accumulation & !mask);
    if value < (accumulation & mask) {
        base += max;
    }
    base
}

/// Assemble the little-endian bit stream a component list consumes.
fn bit_source(value: &Value) -> Option<u128> {
    match value {
        Value::Byte(bytes) => {
            let mut stream = 0u128;
            for (i, b) in bytes.iter().take(16).enumerate() {
                stream |= u128::from(*b) << (8 * i);
            }
            Some(stream)
        }
        _ => value.as_u64().map(u128::from),
    }
}
