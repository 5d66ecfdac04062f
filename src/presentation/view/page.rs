use std::fmt::Write as _;

use super::report_view::ReportView;

/// Which input surface the user selected. Only that surface is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMethod {
    #[default]
    Paste,
    Upload,
}

impl InputMethod {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "upload" => Self::Upload,
            _ => Self::Paste,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paste => "paste",
            Self::Upload => "upload",
        }
    }
}

/// Everything the single page needs to draw itself.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub method: InputMethod,
    pub pasted_text: String,
    pub uploaded_filename: Option<String>,
    pub view: Option<ReportView>,
}

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", "PingFang SC", "Microsoft YaHei", sans-serif; margin: 0; display: flex; min-height: 100vh; }
aside { width: 340px; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
main { flex: 1; padding: 2rem 3rem; }
textarea { width: 100%; height: 300px; box-sizing: border-box; }
button { margin-top: 1rem; padding: .6rem 1.2rem; background: #ff4b4b; color: #fff; border: 0; border-radius: .4rem; cursor: pointer; }
button:disabled { opacity: .6; cursor: wait; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.section-info { background: #e8f1fb; padding: 1rem; border-radius: .4rem; }
.section-success { background: #e8f7ee; padding: 1rem; border-radius: .4rem; }
.section-plain { white-space: pre-wrap; }
.section-info, .section-success { white-space: pre-wrap; }
.warning { background: #fff8e1; padding: 1rem; border-radius: .4rem; }
.error { background: #fdecea; padding: 1rem; border-radius: .4rem; }
#busy { display: none; margin-top: 1rem; }
.success { color: #1a7f37; }
"#;

const SCRIPT: &str = r#"
function syncMethod() {
  var upload = document.querySelector('input[name=input_method][value=upload]').checked;
  document.getElementById('paste-input').style.display = upload ? 'none' : 'block';
  document.getElementById('upload-input').style.display = upload ? 'block' : 'none';
}
document.querySelectorAll('input[name=input_method]').forEach(function (r) { r.addEventListener('change', syncMethod); });
document.getElementById('analyze-form').addEventListener('submit', function () {
  document.getElementById('start').disabled = true;
  document.getElementById('busy').style.display = 'block';
});
syncMethod();
"#;

pub fn render_page(model: &PageModel) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html><html lang=\"zh-CN\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>文章结构化提取工具</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");

    render_sidebar(&mut html, model);

    html.push_str("<main><h1>📑 DeepReader 深度阅读助手</h1>");
    html.push_str(
        "<p>上传文章或粘贴文本，AI 帮你提取 <strong>“核心要义”以及“是什么、为什么、做什么、怎么做、做成什么样”</strong>。</p>",
    );
    if let Some(view) = &model.view {
        render_view(&mut html, view);
    }
    html.push_str("</main><script>");
    html.push_str(SCRIPT);
    html.push_str("</script></body></html>");
    html
}

fn render_sidebar(html: &mut String, model: &PageModel) {
    let checked = |method: InputMethod| {
        if model.method == method { " checked" } else { "" }
    };

    let _ = write!(
        html,
        concat!(
            "<aside><h2>1. 输入内容</h2>",
            "<form id=\"analyze-form\" method=\"post\" action=\"/\" enctype=\"multipart/form-data\">",
            "<p>选择输入方式</p>",
            "<label><input type=\"radio\" name=\"input_method\" value=\"{paste}\"{paste_checked}> 粘贴文本</label><br>",
            "<label><input type=\"radio\" name=\"input_method\" value=\"{upload}\"{upload_checked}> 上传 Word 文档</label>",
            "<div id=\"paste-input\"><p>在此粘贴文章内容</p><textarea name=\"text\">{text}</textarea></div>",
            "<div id=\"upload-input\"><p>上传 .docx 文件</p><input type=\"file\" name=\"file\" accept=\".docx\">{uploaded}</div>",
            "<button id=\"start\" type=\"submit\">🚀 开始深度分析</button>",
            "<p id=\"busy\">DeepSeek 正在思考中...</p>",
            "</form></aside>"
        ),
        paste = InputMethod::Paste.as_str(),
        upload = InputMethod::Upload.as_str(),
        paste_checked = checked(InputMethod::Paste),
        upload_checked = checked(InputMethod::Upload),
        text = escape_html(&model.pasted_text),
        uploaded = model
            .uploaded_filename
            .as_deref()
            .map(|name| format!("<p class=\"success\">已读取: {}</p>", escape_html(name)))
            .unwrap_or_default(),
    );
}

fn render_view(html: &mut String, view: &ReportView) {
    match view {
        ReportView::Warning(message) => {
            let _ = write!(html, "<div class=\"warning\">⚠️ {}</div>", escape_html(message));
        }
        ReportView::Error(message) => {
            let _ = write!(html, "<div class=\"error\">❌ {}</div>", escape_html(message));
        }
        ReportView::Report { sections, download } => {
            let mut sections = sections.iter();

            if let Some(summary) = sections.next() {
                let _ = write!(
                    html,
                    "<h3>{}</h3><div class=\"{}\">{}</div><hr>",
                    escape_html(summary.heading),
                    summary.style.css_class(),
                    escape_html(&summary.body)
                );
            }

            // What/Why/Task on the left, How/Outcome on the right.
            let rest: Vec<_> = sections.collect();
            let (left, right) = rest.split_at(rest.len().min(3));
            html.push_str("<div class=\"columns\">");
            for column in [left, right] {
                html.push_str("<div>");
                for section in column {
                    let _ = write!(
                        html,
                        "<h3>{}</h3><div class=\"{}\">{}</div>",
                        escape_html(section.heading),
                        section.style.css_class(),
                        escape_html(&section.body)
                    );
                }
                html.push_str("</div>");
            }
            html.push_str("</div><hr>");

            let _ = write!(
                html,
                "<a class=\"download\" download=\"{}\" href=\"{}\">📥 下载分析报告 (JSON)</a>",
                download.filename,
                download.data_uri()
            );
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    result
}
