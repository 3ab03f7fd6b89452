/// Display string for a loss: whole milligrams below 1000, otherwise grams
/// with one decimal, halves rounded up (1550 -> "1.6g").
pub fn format_loss(mg: u32) -> String {
    if mg >= 1000 {
        let tenths = (mg as u64 + 50) / 100;
        format!("{}.{}g", tenths / 10, tenths % 10)
    } else {
        format!("{}mg", mg)
    }
}
