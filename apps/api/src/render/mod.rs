// Resume rendering: HTML preview layouts, plain-text flattening, and PDF
// export. PDF generation is CPU-bound and runs inside spawn_blocking.

pub mod handlers;
pub mod layouts;
pub mod pdf;
pub mod sections;

pub use layouts::render_resume;
