/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content is never split by the emphasis
/// rules and never unescaped.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
    pub const TAG: &'static str = "code";
}
