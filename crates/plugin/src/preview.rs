//! Preview documents for the launcher's side pane.
//!
//! The preview embeds the article's intro HTML and slowly scrolls it when it
//! is taller than the pane: wait, scroll to the bottom, pause, jump back, repeat.

/// Delay before scrolling starts, in milliseconds.
pub const SCROLL_START_DELAY_MS: u32 = 7_000;

/// Pause at the bottom before jumping back, in milliseconds.
pub const SCROLL_RESET_DELAY_MS: u32 = 15_000;

/// Pixels advanced per frame.
pub const SCROLL_STEP_PX: f32 = 0.25;

/// Scroll frames per second.
pub const SCROLL_FPS: u32 = 30;

/// Build the preview document around `extract_html`.
///
/// The extract is trusted API output and is embedded as-is.
pub fn render_document(extract_html: &str) -> String {
    format!(
        r#"<html>
  <body style="color:#fff; overflow: hidden;">
    <script>
      let offset = 0, limit = 0, ticker;

      function schedule() {{
        if (document.body.scrollHeight > window.innerHeight) {{
          limit = document.body.scrollHeight - window.innerHeight;
          setTimeout(begin, {start_delay});
        }}
      }}

      function begin() {{
        ticker = setInterval(step, 1000 / {fps});
      }}

      function step() {{
        offset += {step};
        window.scrollTo(0, Math.round(offset));
        if (offset >= limit) {{
          clearInterval(ticker);
          setTimeout(rewind, {reset_delay});
        }}
      }}

      function rewind() {{
        window.scrollTo(0, 0);
        offset = 0;
        schedule();
      }}

      window.addEventListener('load', schedule);
    </script>
    {extract_html}
  </body>
</html>"#,
        start_delay = SCROLL_START_DELAY_MS,
        reset_delay = SCROLL_RESET_DELAY_MS,
        step = SCROLL_STEP_PX,
        fps = SCROLL_FPS,
    )
}
