//! Page shell and stylesheet for the preview document.
//!
//! The geometry mirrors the layout engine: a 375px-wide card with
//! 25px horizontal padding leaves the 325px column the height
//! estimator budgets against, and the 420px content well matches its
//! overflow threshold. Keeping the two in sync is what makes the
//! preview an honest rendition of the pagination.

/// Stylesheet embedded into every preview so the file stands alone.
pub(crate) const STYLESHEET: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: #e9ecef;
            display: flex;
            flex-wrap: wrap;
            gap: 24px;
            padding: 24px;
            justify-content: center;
        }
        .slide {
            width: 375px;
            min-height: 500px;
            background: white;
            border-radius: 12px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.15);
            display: flex;
            flex-direction: column;
            overflow: hidden;
        }
        .slide-header, .slide-footer {
            display: flex;
            justify-content: space-between;
            padding: 10px 25px;
            font-size: 10px;
            font-weight: bold;
            letter-spacing: 1px;
            color: #868e96;
            text-transform: uppercase;
        }
        .slide-header { border-bottom: 1px solid #f1f3f5; }
        .slide-footer { border-top: 1px solid #f1f3f5; margin-top: auto; }
        .slide-body {
            flex: 1;
            padding: 10px 25px;
            max-height: 420px;
            overflow: hidden;
            line-height: 1.5;
            font-size: 14px;
            color: #212529;
        }
        .slide-body h2 {
            font-size: 20px;
            margin: 12px 0 8px;
            color: #212529;
        }
        .slide-body h3 {
            font-size: 16px;
            margin: 10px 0 6px;
            color: #343a40;
        }
        .slide-body p { margin: 8px 0; }
        .slide-body ul, .slide-body ol { margin: 8px 0; padding-left: 20px; }
        .slide-body li { margin: 4px 0; }
        .slide-body img {
            display: block;
            width: 325px;
            max-height: 520px;
            object-fit: contain;
            margin: 8px 0;
            border-radius: 6px;
        }
        .slide-body blockquote {
            border-left: 3px solid #adb5bd;
            padding: 8px 12px;
            margin: 10px 0;
            background: #f8f9fa;
            color: #495057;
        }
        .slide-body .code-block {
            font-family: 'SF Mono', Monaco, 'Courier New', monospace;
            font-size: 12px;
            white-space: pre;
            overflow-x: auto;
            background: #212529;
            color: #e9ecef;
            padding: 12px;
            margin: 10px 0;
            border-radius: 6px;
        }
        .slide-body a { color: #1c7ed6; text-decoration: none; }
        .slide-body code {
            font-family: 'SF Mono', Monaco, 'Courier New', monospace;
            font-size: 0.9em;
            background: #f1f3f5;
            padding: 1px 4px;
            border-radius: 3px;
        }
        .cover .slide-body {
            display: flex;
            flex-direction: column;
            justify-content: center;
            text-align: center;
        }
        .cover-title {
            font-size: 28px;
            font-weight: 800;
            line-height: 1.25;
            color: #212529;
        }
        .cover-subtitle {
            margin-top: 16px;
            font-size: 12px;
            letter-spacing: 1px;
            text-transform: uppercase;
            color: #868e96;
        }
"#;

/// Wrap the rendered slides in a complete standalone page.
pub(crate) fn page(title: &str, slides_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLESHEET}    </style>
</head>
<body>
{slides_html}</body>
</html>"#
    )
}
