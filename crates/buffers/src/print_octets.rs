//! Debug utility for printing octets as hex strings.

/// Formats a byte slice as space-separated hex for logs and test failures.
///
/// At most `max` bytes are shown; the remainder is summarized.
///
/// ```
/// use didl_buffers::print_octets;
///
/// assert_eq!(print_octets(b"DIDL\x00\x00", 16), "44 49 44 4c 00 00");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    if octets.is_empty() {
        return String::new();
    }

    let mut result = format!("{:02x}", octets[0]);
    for &byte in octets.iter().take(max).skip(1) {
        result.push_str(&format!(" {:02x}", byte));
    }

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_octets_single() {
        assert_eq!(print_octets(&[0x68], 16), "68");
    }

    #[test]
    fn test_print_octets_truncated() {
        let data: Vec<u8> = (0..20).collect();
        let result = print_octets(&data, 10);
        assert!(result.starts_with("00 01 02"));
        assert!(result.ends_with("... (10 more)"));
    }
}
