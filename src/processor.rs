//! Post-decode processing of resolved fields and messages.

use std::collections::HashMap;

use chrono::DateTime;
use thiserror::Error;

use crate::message::{DataMessage, FieldValue, Value};

/// Seconds between the UNIX epoch and the FIT epoch, 1989-12-31T00:00:00Z.
pub const FIT_EPOCH_OFFSET: i64 = 631_065_600;

/// An error raised by a processor hook.
#[derive(Debug, Error)]
#[error("{0}.")]
pub struct ProcessorError(pub String);

/// Post-decode transformation applied to every resolved field and message.
///
/// The decoder calls [`process_field`] exactly once per resolved field,
/// then [`process_message`] once per message. Hooks may change a field's
/// `value` or `units`, or restructure the whole message.
///
/// [`process_field`]: Processor::process_field
/// [`process_message`]: Processor::process_message
pub trait Processor {
    /// Transform one resolved field of the named message.
    fn process_field(
        &mut self,
        message_name: &str,
        field: &mut FieldValue,
    ) -> Result<(), ProcessorError> {
        let _ = (message_name, field);
        Ok(())
    }

    /// Transform a whole message after its fields were processed.
    fn process_message(&mut self, message: &mut DataMessage) -> Result<(), ProcessorError> {
        let _ = message;
        Ok(())
    }
}

/// A field hook, mutating the resolved field in place.
pub type FieldHook = fn(&mut FieldValue) -> Result<(), ProcessorError>;

/// A message hook, mutating the resolved message in place.
pub type MessageHook = fn(&mut DataMessage) -> Result<(), ProcessorError>;

/// A [`Processor`] dispatching through name-keyed hook tables.
///
/// The default table converts `date_time` and `local_date_time` seconds to
/// wall-clock values and renders `bool` fields as booleans. Extend it with
/// [`on_type`], [`on_field`], [`on_units`], or [`on_message`] rather than
/// implementing [`Processor`] from scratch.
///
/// For each field, the type hook runs first, then the field hook, then the
/// units hook (keyed by the units in force after the earlier hooks).
///
/// [`on_type`]: HookProcessor::on_type
/// [`on_field`]: HookProcessor::on_field
/// [`on_units`]: HookProcessor::on_units
/// [`on_message`]: HookProcessor::on_message
pub struct HookProcessor {
    types: HashMap<&'static str, FieldHook>,
    fields: HashMap<&'static str, FieldHook>,
    units: HashMap<&'static str, FieldHook>,
    messages: HashMap<&'static str, MessageHook>,
}

impl Default for HookProcessor {
    fn default() -> Self {
        let mut processor = Self::empty();
        processor.on_type("date_time", date_time_to_utc);
        processor.on_type("local_date_time", local_date_time_to_naive);
        processor.on_type("bool", render_bool);
        processor
    }
}

impl HookProcessor {
    /// A table with no hooks at all; fields pass through untouched.
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
            fields: HashMap::new(),
            units: HashMap::new(),
            messages: HashMap::new(),
        }
    }

    /// The default table plus standard-unit conversions: distances in km,
    /// speeds in km/h, semicircle positions in degrees.
    pub fn standard_units() -> Self {
        let mut processor = Self::default();
        processor.on_field("distance", distance_to_km);
        processor.on_field("speed", speed_to_km_h);
        processor.on_units("semicircles", semicircles_to_degrees);
        processor
    }

    /// Register a hook keyed by profile type name.
    pub fn on_type(&mut self, name: &'static str, hook: FieldHook) -> &mut Self {
        self.types.insert(name, hook);
        self
    }

    /// Register a hook keyed by field name.
    pub fn on_field(&mut self, name: &'static str, hook: FieldHook) -> &mut Self {
        self.fields.insert(name, hook);
        self
    }

    /// Register a hook keyed by units.
    pub fn on_units(&mut self, name: &'static str, hook: FieldHook) -> &mut Self {
        self.units.insert(name, hook);
        self
    }

    /// Register a hook keyed by message name.
    pub fn on_message(&mut self, name: &'static str, hook: MessageHook) -> &mut Self {
        self.messages.insert(name, hook);
        self
    }
}

impl Processor for HookProcessor {
    fn process_field(
        &mut self,
        _message_name: &str,
        field: &mut FieldValue,
    ) -> Result<(), ProcessorError> {
        if let Some(hook) = self.types.get(field.type_name) {
            hook(field)?;
        }
        if let Some(hook) = self.fields.get(field.name.as_ref()) {
            hook(field)?;
        }
        if let Some(units) = field.units.clone() {
            if let Some(hook) = self.units.get(units.as_ref()) {
                hook(field)?;
            }
        }
        Ok(())
    }

    fn process_message(&mut self, message: &mut DataMessage) -> Result<(), ProcessorError> {
        let name = message.name.clone();
        if let Some(hook) = self.messages.get(name.as_ref()) {
            hook(message)?;
        }
        Ok(())
    }
}

fn date_time_to_utc(field: &mut FieldValue) -> Result<(), ProcessorError> {
    if let Some(seconds) = field.value.as_ref().and_then(Value::as_u64) {
        let stamp = DateTime::from_timestamp(FIT_EPOCH_OFFSET + seconds as i64, 0)
            .ok_or_else(|| ProcessorError(format!("date_time {seconds} is out of range")))?;
        field.value = Some(Value::Timestamp(stamp));
        field.units = None;
    }
    Ok(())
}

fn local_date_time_to_naive(field: &mut FieldValue) -> Result<(), ProcessorError> {
    if let Some(seconds) = field.value.as_ref().and_then(Value::as_u64) {
        let stamp = DateTime::from_timestamp(FIT_EPOCH_OFFSET + seconds as i64, 0)
            .ok_or_else(|| ProcessorError(format!("local_date_time {seconds} is out of range")))?;
        field.value = Some(Value::LocalTimestamp(stamp.naive_utc()));
        field.units = None;
    }
    Ok(())
}

fn render_bool(field: &mut FieldValue) -> Result<(), ProcessorError> {
    if let Some(v) = field.value.as_ref().and_then(Value::as_u64) {
        field.value = Some(Value::Bool(v != 0));
    }
    Ok(())
}

fn distance_to_km(field: &mut FieldValue) -> Result<(), ProcessorError> {
    if let Some(v) = field.value.as_ref().and_then(Value::as_f64) {
        field.value = Some(Value::Float64(v / 1000.0));
    }
    field.units = Some("km".into());
    Ok(())
}

fn speed_to_km_h(field: &mut FieldValue) -> Result<(), ProcessorError> {
    if let Some(v) = field.value.as_ref().and_then(Value::as_f64) {
        field.value = Some(Value::Float64(v * 3600.0 / 1000.0));
    }
    field.units = Some("km/h".into());
    Ok(())
}

fn semicircles_to_degrees(field: &mut FieldValue) -> Result<(), ProcessorError> {
    if let Some(v) = field.value.as_ref().and_then(Value::as_f64) {
        field.value = Some(Value::Float64(v * (180.0 / 2_147_483_648.0)));
    }
    field.units = Some("deg".into());
    Ok(())
}
