use mailsmith_model::{Block, BlockBody, CanvasStyle, Document, ShadowLevel};

/// Neutral page background behind the message body
const PAGE_BACKGROUND: &str = "#f4f4f5";

/// Fixed content width in logical pixels; email clients cannot be trusted
/// with fluid layouts
const CONTENT_WIDTH: u32 = 600;

/// Brand attribution appended unless the document is white-labeled
const FOOTER_TEXT: &str = "Sent with Mailsmith";

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document to a single email-client-safe HTML string.
///
/// Layout: an outer full-width table centering a fixed-width inner table,
/// one row per block in sequence order, and a brand footer row unless the
/// document is white-labeled. Never reads anything beyond the document.
pub fn compile_to_html(document: &Document, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line(&format!(
        "<table width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" style=\"background-color:{};\">",
        PAGE_BACKGROUND
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td align=\"center\" style=\"padding:24px 0;\">");
    ctx.indent();

    ctx.add_line(&format!(
        "<table width=\"{}\" cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" style=\"{}\">",
        CONTENT_WIDTH,
        canvas_style(&document.canvas)
    ));
    ctx.indent();

    for block in &document.blocks {
        compile_block(block, &mut ctx);
    }

    if !document.white_label {
        compile_footer(&mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</table>");
    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");

    ctx.get_output()
}

fn canvas_style(canvas: &CanvasStyle) -> String {
    let mut style = format!("background-color:{};", canvas.background_color);

    if canvas.border {
        style.push_str("border:1px solid #e4e4e7;");
    }

    match canvas.shadow {
        ShadowLevel::None => {}
        ShadowLevel::Sm => style.push_str("box-shadow:0 1px 2px rgba(0,0,0,0.05);"),
        ShadowLevel::Lg => style.push_str("box-shadow:0 10px 15px rgba(0,0,0,0.1);"),
    }

    style
}

fn compile_block(block: &Block, ctx: &mut Context) {
    ctx.add_line("<tr>");
    ctx.indent();

    match &block.body {
        BlockBody::Text { content } => compile_text_cell(block, content, ctx),
        BlockBody::Image { src, width, height } => {
            compile_image_cell(block, src, *width, *height, ctx)
        }
        BlockBody::Button { content, url } => compile_button_cell(block, content, url, ctx),
    }

    ctx.dedent();
    ctx.add_line("</tr>");
}

fn compile_text_cell(block: &Block, content: &str, ctx: &mut Context) {
    let style = &block.style;
    ctx.add_line(&format!(
        "<td align=\"{}\" valign=\"{}\" style=\"padding:{}px;font-size:{}px;color:{};background-color:{};\">{}</td>",
        style.align_x.as_attr(),
        style.align_y.as_attr(),
        style.padding,
        style.font_size,
        style.color,
        style.background_color,
        escape_html(content)
    ));
}

fn compile_image_cell(block: &Block, src: &str, width: u32, height: u32, ctx: &mut Context) {
    let style = &block.style;
    let cell_style = format!(
        "padding:{}px;background-color:{};",
        style.padding, style.background_color
    );

    // Upload may still be in flight; hold the row open without an img tag
    if src.is_empty() {
        ctx.add_line(&format!("<td align=\"center\" style=\"{}\"></td>", cell_style));
        return;
    }

    ctx.add_line(&format!("<td align=\"center\" style=\"{}\">", cell_style));
    ctx.indent();
    // Width and height as attributes: many clients ignore CSS sizing
    ctx.add_line(&format!(
        "<img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"\" style=\"display:block;max-width:100%;\" />",
        escape_html(src),
        width,
        height
    ));
    ctx.dedent();
    ctx.add_line("</td>");
}

fn compile_button_cell(block: &Block, content: &str, url: &str, ctx: &mut Context) {
    let style = &block.style;
    let href = if url.is_empty() { "#" } else { url };

    ctx.add_line(&format!(
        "<td align=\"{}\" style=\"padding:{}px;\">",
        style.align_x.as_attr(),
        style.padding
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<a href=\"{}\" style=\"display:inline-block;padding:12px 24px;background-color:{};color:#ffffff;text-decoration:none;border-radius:{}px;font-size:{}px;\">{}</a>",
        escape_html(href),
        style.background_color,
        style.radius,
        style.font_size,
        escape_html(content)
    ));
    ctx.dedent();
    ctx.add_line("</td>");
}

fn compile_footer(ctx: &mut Context) {
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line(&format!(
        "<td align=\"center\" style=\"padding:16px;font-size:12px;color:#a1a1aa;\">{}</td>",
        FOOTER_TEXT
    ));
    ctx.dedent();
    ctx.add_line("</tr>");
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
