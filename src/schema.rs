//! JSON shapes and the regexes that match them.

use serde_json::{Number, Value};

pub trait ToRegex {
    fn to_regex(&self) -> String;
}

const UNSIGNED: &str = "(0|[1-9][0-9]*)";

/// The type structure of a JSON value, ignoring concrete values
/// except for object keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Integer { signed: bool },
    Float,
    String,
    Array(Option<Box<JsonType>>),
    Object(Vec<KeyValueType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueType {
    key: String,
    value: JsonType,
}

impl JsonType {
    /// Infers the shape of `value`. Arrays take the shape of their first element.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) => Self::number(n),
            Value::String(_) => Self::String,
            Value::Array(items) => Self::Array(items.first().map(|x| Box::new(Self::infer(x)))),
            Value::Object(map) => Self::Object(
                map.iter()
                    .map(|(key, value)| KeyValueType {
                        key: key.clone(),
                        value: Self::infer(value),
                    })
                    .collect(),
            ),
        }
    }

    fn number(n: &Number) -> Self {
        if n.is_u64() {
            Self::Integer { signed: false }
        } else if n.is_i64() {
            Self::Integer { signed: true }
        } else {
            Self::Float
        }
    }
}

impl ToRegex for KeyValueType {
    fn to_regex(&self) -> String {
        let key = serde_json::to_string(&self.key).unwrap_or_default();
        format!("{}: {}", regex_syntax::escape(&key), self.value.to_regex())
    }
}

impl ToRegex for JsonType {
    fn to_regex(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Boolean => "(true|false)".to_string(),
            Self::Integer { signed: false } => UNSIGNED.to_string(),
            Self::Integer { signed: true } => format!("-?{}", UNSIGNED),
            Self::Float => format!(r"-?{}\.[0-9]+", UNSIGNED),
            Self::String => r#""([a-zA-Z0-9 .,:_-]*)""#.to_string(),
            Self::Array(None) => r"\[\]".to_string(),
            Self::Array(Some(item)) => {
                let item = item.to_regex();
                format!(r"\[({}(, {})*)?\]", item, item)
            }
            Self::Object(items) if items.is_empty() => r"\{\}".to_string(),
            Self::Object(items) => format!(
                r"\{{ {} \}}",
                items
                    .iter()
                    .map(|item| item.to_regex())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex_of(line: &str) -> String {
        JsonType::infer(&serde_json::from_str(line).unwrap()).to_regex()
    }

    fn full_match(regex: &str, s: &str) -> bool {
        regex::Regex::new(&format!("^(?:{})$", regex))
            .unwrap()
            .is_match(s)
    }

    #[test]
    fn scalars() {
        assert_eq!(regex_of("null"), "null");
        assert_eq!(regex_of("true"), "(true|false)");
        assert_eq!(regex_of("12"), "(0|[1-9][0-9]*)");
        assert_eq!(regex_of("-12"), "-?(0|[1-9][0-9]*)");
        assert_eq!(regex_of("1.5"), r"-?(0|[1-9][0-9]*)\.[0-9]+");
        assert_eq!(regex_of(r#""x""#), r#""([a-zA-Z0-9 .,:_-]*)""#);
    }

    #[test]
    fn containers() {
        assert_eq!(regex_of("[]"), r"\[\]");
        assert_eq!(regex_of("{}"), r"\{\}");
        assert_eq!(
            regex_of("[1, 2]"),
            r"\[((0|[1-9][0-9]*)(, (0|[1-9][0-9]*))*)?\]"
        );
        assert_eq!(
            regex_of(r#"{"a": true, "b": null}"#),
            r#"\{ "a": (true|false), "b": null \}"#
        );
    }

    #[test]
    fn keys_are_escaped_and_ordered() {
        let regex = regex_of(r#"{"z.z": 1, "a+": 2}"#);
        assert!(regex.starts_with(r#"\{ "z\.z": "#));
        assert!(regex.contains(r#""a\+": "#));
        assert!(full_match(&regex, r#"{ "z.z": 0, "a+": 10 }"#));
        assert!(!full_match(&regex, r#"{ "zxz": 0, "a+": 10 }"#));
    }

    #[test]
    fn matches_formatted_line() {
        let regex = regex_of(
            r#"{"inning": {"number": 1, "top": true}, "type": "Groundout", "fielders": ["A B"]}"#,
        );
        assert!(full_match(
            &regex,
            r#"{ "inning": { "number": 1, "top": true }, "type": "Groundout", "fielders": ["A B", "C"] }"#
        ));
        assert!(full_match(
            &regex,
            r#"{ "inning": { "number": 907, "top": false }, "type": "", "fielders": [] }"#
        ));
    }
}
