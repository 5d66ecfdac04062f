mod docx_adapter;

pub use docx_adapter::DocxAdapter;
