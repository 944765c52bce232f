/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them,
/// and emphasis delimiters inside them never pair with ones outside.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
