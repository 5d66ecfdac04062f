mod page;
mod report_view;

pub use page::{InputMethod, PageModel, escape_html, render_page};
pub use report_view::{
    BUSY_MESSAGE, DownloadLink, INPUT_MISSING_MESSAGE, ReportView, SectionView,
};
