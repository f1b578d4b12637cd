use crate::domain::model::CpfValidation;

/// Checksum validation for CPF numbers: 11 digits, the last two derived from
/// the first nine by a weighted-sum mod-11 formula.
///
/// Never fails: malformed input yields `valid: false` together with whatever
/// digits were left after stripping.
pub fn validate(input: &str) -> CpfValidation {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    // Sequences of one repeated digit pass the checksum but are not issued
    if values.len() != 11 || all_identical(&values) {
        return CpfValidation {
            valid: false,
            digits,
        };
    }

    let d1 = check_digit(&values[..9]);
    let d2 = check_digit(&values[..10]);
    let valid = values[9] == d1 && values[10] == d2;

    CpfValidation { valid, digits }
}

// Weights start one above the prefix length (10 for the first check digit,
// 11 for the second) and decrease to 2. A remainder of 10 collapses to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (start - i as u32))
        .sum();

    let rem = (sum * 10) % 11;
    if rem == 10 {
        0
    } else {
        rem
    }
}

fn all_identical(values: &[u32]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}
