// pn532-mifare/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) for a wire frame.
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) over TFI + command payload.
/// DCS = 0x100 - (sum(payload) & 0xff)
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
