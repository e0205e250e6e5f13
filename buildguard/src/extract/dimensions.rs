//! Graphics card length and case clearance (millimetres).

use super::{capture_u32, contains_any, find_spec, find_spec_by_keys, synonyms, MILLIMETRES};
use crate::model::ProductRecord;

pub fn gpu_length(gpu: &ProductRecord) -> Option<u32> {
    find_spec_by_keys(gpu, synonyms::GPU_LENGTH, |v| capture_u32(&MILLIMETRES, v))
}

/// Longest graphics card the case accepts.
pub fn case_gpu_clearance(case: &ProductRecord) -> Option<u32> {
    find_spec(
        case,
        |key| {
            contains_any(key, synonyms::CASE_GPU_SUBJECT) && contains_any(key, synonyms::CASE_GPU_LIMIT)
        },
        |v| capture_u32(&MILLIMETRES, v),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_length() {
        let gpu = ProductRecord::new("RTX 4080").with_spec("Pituus", "304 mm");
        assert_eq!(gpu_length(&gpu), Some(304));
        let english = ProductRecord::new("RX 7800 XT").with_spec("Card length", "267mm");
        assert_eq!(gpu_length(&english), Some(267));
        assert_eq!(gpu_length(&ProductRecord::new("RTX 4080")), None);
    }

    #[test]
    fn test_case_clearance_needs_subject_and_limit() {
        let case = ProductRecord::new("Fractal Design North")
            .with_spec("GPU", "PCIe 4.0 riser")
            .with_spec("Max GPU length", "355 mm");
        assert_eq!(case_gpu_clearance(&case), Some(355));
        let finnish = ProductRecord::new("Kotelo").with_spec("Näytönohjaimen maksimipituus", "400 mm");
        assert_eq!(case_gpu_clearance(&finnish), Some(400));
    }
}
