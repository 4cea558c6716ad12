//! Status line mirror

use crate::procs::StatusValue;
use hackrl_core::{ConditionMask, FORMATTED_FIELDS, StatusBlock, StatusField};
use tracing::warn;

/// Latest formatted value of every status field plus the condition mask
#[derive(Debug, Clone, Default)]
pub struct StatusPanel {
    fields: [String; FORMATTED_FIELDS],
    conditions: ConditionMask,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one host status update.
    ///
    /// `decode_gold` turns the gold field's mixed glyph text into plain text.
    /// Returns whether anything was stored.
    pub fn update<F>(&mut self, index: i32, value: StatusValue<'_>, decode_gold: F) -> bool
    where
        F: FnOnce(&str) -> String,
    {
        let Some(field) = StatusField::from_index(index) else {
            // flush, reset and anything out of range
            return false;
        };

        match (field, value) {
            (StatusField::Condition, StatusValue::Conditions(bits)) => {
                self.conditions = ConditionMask::from_bits_retain(bits);
                true
            }
            (StatusField::Condition, StatusValue::Text(text)) => {
                warn!("Text {:?} sent for the condition field, ignoring", text);
                false
            }
            (_, StatusValue::Conditions(bits)) => {
                warn!("Condition bits {:#x} sent for field {:?}, ignoring", bits, field);
                false
            }
            (StatusField::Gold, StatusValue::Text(text)) => {
                self.fields[field.index()] = decode_gold(text);
                true
            }
            (_, StatusValue::Text(text)) => {
                self.fields[field.index()] = text.to_string();
                true
            }
        }
    }

    /// Current text of a formatted field (empty for the condition field)
    pub fn field(&self, field: StatusField) -> &str {
        self.fields
            .get(field.index())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn conditions(&self) -> ConditionMask {
        self.conditions
    }

    /// Exported status block
    pub fn block(&self) -> StatusBlock {
        StatusBlock::from_fields(&self.fields, self.conditions)
    }
}

fn hex_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Decode host "mixed" text, where `\G` followed by four check digits and
/// four glyph digits (all hex) stands for a map symbol.
///
/// Sequences whose check digits differ from `key` are left as they are.
/// `\\` yields one backslash and `\` before any other character is dropped.
pub fn decode_mixed<F>(text: &str, key: u32, symbol: F) -> String
where
    F: Fn(i32) -> u8,
{
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' {
            let start = i;
            i += 1;
            match chars.get(i) {
                Some('G') => {
                    i += 1;
                    let (check, next) = read_hex(&chars, i);
                    if check == key {
                        let (glyph, next) = read_hex(&chars, next);
                        out.push(char::from(symbol(glyph as i32)));
                        i = next;
                        continue;
                    }
                    // not ours, copy it verbatim
                    i = start;
                }
                Some(_) => {}
                None => i = start,
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Up to four hex digits starting at `start`; returns value and next index
fn read_hex(chars: &[char], start: usize) -> (u32, usize) {
    let mut value = 0;
    let mut i = start;
    while i < chars.len() && i - start < 4 {
        match hex_value(chars[i]) {
            Some(d) => value = value * 16 + d,
            None => break,
        }
        i += 1;
    }
    (value, i)
}
