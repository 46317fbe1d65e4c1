//! Lọc hồ sơ theo từ khóa tìm kiếm.

use crate::MedicalRecord;

/// Giữ lại các hồ sơ có `condition` hoặc `diagnosis` chứa `term` (không phân biệt hoa thường).
///
/// Thứ tự đầu vào được giữ nguyên. Từ khóa rỗng khớp mọi hồ sơ; từ khóa không bị cắt khoảng trắng.
pub fn filter_records<'a>(records: &'a [MedicalRecord], term: &str) -> Vec<&'a MedicalRecord> {
    let needle = term.to_lowercase();
    let matches: Vec<&MedicalRecord> = records
        .iter()
        .filter(|record| matches_lowered(record, &needle))
        .collect();
    tracing::trace!(term_len = term.len(), matched = matches.len(), "lọc hồ sơ");
    matches
}

pub fn record_matches(record: &MedicalRecord, term: &str) -> bool {
    matches_lowered(record, &term.to_lowercase())
}

fn matches_lowered(record: &MedicalRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.condition.to_lowercase().contains(needle)
        || record.diagnosis.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, sample_records};
    use crate::{RecordSeverity, RecordStatus};

    fn ids(records: &[&MedicalRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn viral_matches_first_and_third_in_order() {
        let records = sample_records();
        assert_eq!(ids(&filter_records(&records, "viral")), ["1", "3"]);
    }

    #[test]
    fn unmatched_term_yields_empty() {
        let records = sample_records();
        assert!(filter_records(&records, "NOMATCH123").is_empty());
    }

    #[test]
    fn empty_term_keeps_everything() {
        let records = sample_records();
        assert_eq!(ids(&filter_records(&records, "")), ["1", "2", "3"]);
    }

    #[test]
    fn condition_alone_is_enough() {
        let records = sample_records();
        assert_eq!(ids(&filter_records(&records, "FOLLOW-UP")), ["2"]);
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let records = sample_records();
        assert_eq!(ids(&filter_records(&records, "common cold")), ["1"]);
        assert!(filter_records(&records, " gastroenteritis ").is_empty());
    }

    #[test]
    fn other_fields_are_not_searched() {
        let records = sample_records();
        assert!(filter_records(&records, "Cough").is_empty());
        assert!(filter_records(&records, "BRAT").is_empty());
    }

    #[test]
    fn record_matches_is_case_insensitive() {
        let rec = record(
            "x",
            "Asthma",
            "Allergic ASTHMA exacerbation",
            RecordStatus::Active,
            RecordSeverity::High,
        );
        assert!(record_matches(&rec, "asthma EXAC"));
        assert!(!record_matches(&rec, "copd"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn records_strategy() -> impl Strategy<Value = Vec<MedicalRecord>> {
            proptest::collection::vec(("[A-Za-z -]{0,16}", "[A-Za-z -]{0,24}"), 0..12).prop_map(
                |fields| {
                    fields
                        .into_iter()
                        .enumerate()
                        .map(|(idx, (condition, diagnosis))| {
                            record(
                                &idx.to_string(),
                                &condition,
                                &diagnosis,
                                RecordStatus::Active,
                                RecordSeverity::Low,
                            )
                        })
                        .collect()
                },
            )
        }

        proptest! {
            /// Kết quả là dãy con giữ thứ tự và chứa đúng mọi hồ sơ khớp.
            #[test]
            fn result_is_ordered_subsequence(records in records_strategy(), term in "[A-Za-z ]{0,3}") {
                let result = filter_records(&records, &term);
                let positions: Vec<usize> = result
                    .iter()
                    .map(|r| r.id.parse::<usize>().unwrap())
                    .collect();

                prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
                let expected = records.iter().filter(|r| record_matches(r, &term)).count();
                prop_assert_eq!(result.len(), expected);
            }

            #[test]
            fn empty_term_returns_all(records in records_strategy()) {
                let result = filter_records(&records, "");
                let all: Vec<&MedicalRecord> = records.iter().collect();
                prop_assert_eq!(result, all);
            }

            #[test]
            fn ascii_case_does_not_matter(records in records_strategy(), term in "[A-Za-z]{0,3}") {
                let base = filter_records(&records, &term);
                prop_assert_eq!(&base, &filter_records(&records, &term.to_uppercase()));
                prop_assert_eq!(&base, &filter_records(&records, &term.to_lowercase()));
            }

            #[test]
            fn filtering_twice_changes_nothing(records in records_strategy(), term in "[A-Za-z ]{0,3}") {
                let once: Vec<MedicalRecord> =
                    filter_records(&records, &term).into_iter().cloned().collect();
                let twice = filter_records(&once, &term);
                let once_refs: Vec<&MedicalRecord> = once.iter().collect();
                prop_assert_eq!(twice, once_refs);
            }
        }
    }
}
