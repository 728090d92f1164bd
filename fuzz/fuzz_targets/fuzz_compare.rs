#![no_main]
use libfuzzer_sys::fuzz_target;
use uml_check::compare::{compare_models, ComparisonMode};
use uml_check::model::Provenance;

/// Fuzz the consistency engine end to end.
///
/// The input is split on the first NUL byte into a code document and a
/// diagram document. Whatever parses is compared under every mode; the
/// engine must never panic.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (code, diagram) = s.split_once('\0').unwrap_or((s, s));
    let (Ok(code), Ok(diagram)) = (
        uml_check::parsers::parse_model_str(code, Some(Provenance::Code)),
        uml_check::parsers::parse_model_str(diagram, Some(Provenance::Diagram)),
    ) else {
        return;
    };
    for mode in ComparisonMode::all() {
        let _ = compare_models(&code, &diagram, *mode);
    }
});
