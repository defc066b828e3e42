//! Form state management and payload derivation

use super::fields::{FieldKind, FIELDS};
use serde_json::{Map, Number, Value};

/// Current values for every field in the registry
///
/// Holds exactly one entry per entry in [`FIELDS`], in the same order.
/// Choice fields always hold one of their declared choices; numeric
/// fields hold the raw text the user typed (possibly empty).
#[derive(Debug, Clone)]
pub struct FormState {
    values: Vec<String>,
}

impl FormState {
    /// Create the initial form: numeric fields empty, choice fields on
    /// their first declared choice
    pub fn new() -> Self {
        let values = FIELDS
            .iter()
            .map(|field| match field.kind {
                FieldKind::Numeric => String::new(),
                FieldKind::Choice(choices) => choices[0].to_string(),
            })
            .collect();
        Self { values }
    }

    /// Current value of the field at `index`
    pub fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// Replace the value of the field at `index`
    #[allow(dead_code)]
    pub fn set_value(&mut self, index: usize, value: String) {
        self.values[index] = value;
    }

    /// Append a character to a numeric field's value
    ///
    /// Only digits, `.` and `-` are accepted; everything else is
    /// dropped. Choice fields ignore character input entirely.
    pub fn push_char(&mut self, index: usize, c: char) -> bool {
        if !FIELDS[index].is_numeric() {
            return false;
        }
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.values[index].push(c);
            return true;
        }
        false
    }

    /// Remove the last character from a numeric field's value
    pub fn pop_char(&mut self, index: usize) -> bool {
        if !FIELDS[index].is_numeric() {
            return false;
        }
        self.values[index].pop().is_some()
    }

    /// Select the next declared choice for a choice field (wraps)
    pub fn next_choice(&mut self, index: usize) -> bool {
        self.cycle_choice(index, 1)
    }

    /// Select the previous declared choice for a choice field (wraps)
    pub fn prev_choice(&mut self, index: usize) -> bool {
        self.cycle_choice(index, -1)
    }

    fn cycle_choice(&mut self, index: usize, step: isize) -> bool {
        let choices = FIELDS[index].choices();
        if choices.is_empty() {
            return false;
        }
        let current = choices
            .iter()
            .position(|c| *c == self.values[index])
            .unwrap_or(0);
        let len = choices.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.values[index] = choices[next].to_string();
        true
    }

    /// Build the JSON payload sent to the prediction endpoint
    ///
    /// Numeric fields with a parseable value contribute a JSON number;
    /// blank or unparseable numeric fields are omitted. Choice fields
    /// pass through as strings.
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for (field, value) in FIELDS.iter().zip(&self.values) {
            match field.kind {
                FieldKind::Numeric => {
                    if value.is_empty() {
                        continue;
                    }
                    if let Some(n) = value.parse::<f64>().ok().and_then(Number::from_f64) {
                        payload.insert(field.key.to_string(), Value::Number(n));
                    }
                }
                FieldKind::Choice(_) => {
                    payload.insert(field.key.to_string(), Value::String(value.clone()));
                }
            }
        }
        payload
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fields::FieldSpec;
    use pretty_assertions::assert_eq;

    fn index_of(key: &str) -> usize {
        FIELDS.iter().position(|f| f.key == key).unwrap()
    }

    #[test]
    fn test_initial_values() {
        let form = FormState::new();
        for (i, field) in FIELDS.iter().enumerate() {
            match field.kind {
                FieldKind::Numeric => assert_eq!(form.value(i), ""),
                FieldKind::Choice(choices) => assert_eq!(form.value(i), choices[0]),
            }
        }
    }

    #[test]
    fn test_push_char_numeric() {
        let mut form = FormState::new();
        let age = index_of("Age");
        assert!(form.push_char(age, '4'));
        assert!(form.push_char(age, '5'));
        assert_eq!(form.value(age), "45");
    }

    #[test]
    fn test_push_char_rejects_non_numeric_input() {
        let mut form = FormState::new();
        let age = index_of("Age");
        assert!(!form.push_char(age, 'x'));
        assert_eq!(form.value(age), "");
    }

    #[test]
    fn test_push_char_on_choice_field_is_noop() {
        let mut form = FormState::new();
        let htn = index_of("Hypertension");
        assert!(!form.push_char(htn, '1'));
        assert_eq!(form.value(htn), "yes");
    }

    #[test]
    fn test_pop_char() {
        let mut form = FormState::new();
        let age = index_of("Age");
        form.set_value(age, "45".to_string());
        assert!(form.pop_char(age));
        assert_eq!(form.value(age), "4");
        assert!(form.pop_char(age));
        assert!(!form.pop_char(age));
    }

    #[test]
    fn test_choice_cycling_wraps() {
        let mut form = FormState::new();
        let htn = index_of("Hypertension");
        assert!(form.next_choice(htn));
        assert_eq!(form.value(htn), "no");
        assert!(form.next_choice(htn));
        assert_eq!(form.value(htn), "yes");
        assert!(form.prev_choice(htn));
        assert_eq!(form.value(htn), "no");
    }

    #[test]
    fn test_cycle_choice_on_numeric_field_is_noop() {
        let mut form = FormState::new();
        let age = index_of("Age");
        assert!(!form.next_choice(age));
        assert_eq!(form.value(age), "");
    }

    #[test]
    fn test_payload_omits_blank_numeric_fields() {
        let form = FormState::new();
        let payload = form.payload();
        for field in FIELDS.iter().filter(|f| f.is_numeric()) {
            assert!(!payload.contains_key(field.key));
        }
    }

    #[test]
    fn test_payload_parses_numeric_values() {
        let mut form = FormState::new();
        form.set_value(index_of("Age"), "45".to_string());
        form.set_value(index_of("Specific_Gravity"), "1.020".to_string());
        let payload = form.payload();
        assert_eq!(payload["Age"], serde_json::json!(45.0));
        assert_eq!(payload["Specific_Gravity"], serde_json::json!(1.020));
    }

    #[test]
    fn test_payload_omits_unparseable_numeric_values() {
        let mut form = FormState::new();
        form.set_value(index_of("Age"), "-".to_string());
        assert!(!form.payload().contains_key("Age"));
    }

    #[test]
    fn test_payload_choice_values_are_declared_choices() {
        let mut form = FormState::new();
        form.next_choice(index_of("Appetite"));
        let payload = form.payload();
        for field in FIELDS.iter() {
            if let FieldKind::Choice(choices) = field.kind {
                let value = payload[field.key].as_str().unwrap();
                assert!(choices.contains(&value), "{} = {}", field.key, value);
            }
        }
    }

    #[test]
    fn test_payload_defaults_contain_all_choice_fields() {
        let payload = FormState::new().payload();
        let choice_count = FIELDS.iter().filter(|f: &&FieldSpec| !f.is_numeric()).count();
        assert_eq!(payload.len(), choice_count);
    }
}
