/// Validates a Turkish national identification number.
///
/// After stripping whitespace the value must be exactly 11 digits, must not
/// start with zero, and must satisfy both checksum digits:
///
/// - digit 10 equals `((d0+d2+d4+d6+d8) * 7 - (d1+d3+d5+d7)) mod 10`
/// - digit 11 equals the sum of the first ten digits mod 10
pub fn validate_national_id(id: &str) -> bool {
    let cleaned: String = id.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() != 11 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<i32> = cleaned.bytes().map(|b| i32::from(b - b'0')).collect();
    if digits[0] == 0 {
        return false;
    }

    let odd_sum: i32 = digits.iter().step_by(2).take(5).sum();
    let even_sum: i32 = digits.iter().skip(1).step_by(2).take(4).sum();

    let check10 = (odd_sum * 7 - even_sum).rem_euclid(10);
    if check10 != digits[9] {
        return false;
    }

    let check11 = digits[..10].iter().sum::<i32>() % 10;
    check11 == digits[10]
}
