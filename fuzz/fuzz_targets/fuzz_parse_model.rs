#![no_main]
use libfuzzer_sys::fuzz_target;
use uml_check::model::Provenance;

/// Fuzz the interchange front end.
///
/// Feeds arbitrary UTF-8 strings to `parse_model_str`, covering JSON/YAML
/// detection, entry skipping and the model builder.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = uml_check::parsers::parse_model_str(s, Some(Provenance::Code));
    }
});
