/// Formats a rating change with an explicit sign: `+37`, `-17`, `+0`.
pub fn fmt_signed(delta: i32) -> String {
    format!("{:+}", delta)
}
