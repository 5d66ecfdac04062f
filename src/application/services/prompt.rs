pub const SYSTEM_PROMPT: &str = r#"你是一个资深的公文与文章分析专家。你的任务是将用户输入的文章进行深度结构化拆解。
请务必返回标准的 JSON 格式数据，不要包含 Markdown 标记。
JSON 结构必须包含以下字段：
{
    "core_summary": "文章的核心要义（100字以内）",
    "what": "是什么：文章讨论的核心概念、背景或定义",
    "why": "为什么：做这件事的原因、背景痛点或必要性",
    "todo": "做什么：具体的目标、任务方向或重点工程",
    "how": "怎么做：具体的实施路径、手段、措施或抓手（分点概括）",
    "result": "做成怎么样：预期的成效、量化指标或未来愿景"
}
如果文章中缺失某一部分，该字段请填“文中未提及”。"#;

const USER_MESSAGE_PREFIX: &str = "请分析以下文章：\n";

/// Returns at most the first `max_chars` characters of `text`, cut on a
/// character boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn build_user_message(article: &str) -> String {
    format!("{USER_MESSAGE_PREFIX}{article}")
}
