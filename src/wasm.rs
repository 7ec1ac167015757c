// WebAssembly bindings for parsing and formatting byte sizes
use crate::culture::Culture;
use crate::size::{ByteSize, UnitSystem};
use crate::text;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ByteSizeWasm {
    culture: Culture,
}

impl Default for ByteSizeWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl ByteSizeWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            culture: Culture::invariant(),
        }
    }

    /// Switch the culture used by later calls (e.g. "de-DE")
    #[wasm_bindgen]
    pub fn set_culture(&mut self, name: &str) -> Result<(), JsValue> {
        self.culture = Culture::from_name(name).map_err(to_js_error)?;
        Ok(())
    }

    /// Parse a size string and return its bit count.
    /// Bit counts above 2^53 lose precision on the JS side.
    #[wasm_bindgen]
    pub fn parse(&self, input: &str) -> Result<f64, JsValue> {
        let size = text::parse(input, &self.culture).map_err(to_js_error)?;
        Ok(size.bits() as f64)
    }

    /// Like `parse`, returning `undefined` instead of throwing
    #[wasm_bindgen]
    pub fn try_parse(&self, input: &str) -> Option<f64> {
        text::try_parse(input, &self.culture).map(|size| size.bits() as f64)
    }

    /// Parse a size string and return JSON: {"bits": ..., "bytes": ..., "display": ...}
    #[wasm_bindgen]
    pub fn describe(&self, input: &str) -> Result<String, JsValue> {
        let size = text::parse(input, &self.culture).map_err(to_js_error)?;

        let result_obj = serde_json::json!({
            "bits": size.bits(),
            "bytes": size.bytes(),
            "display": size.format(text::DEFAULT_TEMPLATE, &self.culture, UnitSystem::Decimal),
            "binary_display": size.to_binary_string(&self.culture),
        });

        serde_json::to_string(&result_obj)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Format a bit count with a numeric template
    #[wasm_bindgen]
    pub fn format(&self, bits: f64, template: Option<String>, binary: bool) -> String {
        let system = if binary {
            UnitSystem::Binary
        } else {
            UnitSystem::Decimal
        };
        let template = template.unwrap_or_else(|| text::DEFAULT_TEMPLATE.to_string());
        ByteSize::from_bits(bits as i64).format(&template, &self.culture, system)
    }

    /// Sum an array of size strings, returning the total bit count
    #[wasm_bindgen]
    pub fn sum(&self, inputs: js_sys::Array) -> Result<f64, JsValue> {
        let mut sizes = Vec::with_capacity(inputs.length() as usize);
        for value in inputs.iter() {
            let input = value
                .as_string()
                .ok_or_else(|| JsValue::from_str("Expected an array of strings"))?;
            sizes.push(text::parse(&input, &self.culture).map_err(to_js_error)?);
        }

        ByteSize::sum(sizes)
            .map(|total| total.bits() as f64)
            .ok_or_else(|| JsValue::from_str("Cannot sum an empty list of sizes"))
    }
}
