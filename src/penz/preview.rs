//! Live preview composition.
//!
//! The three source blobs are concatenated into one document, unvalidated and
//! unsanitized. Isolation is wholly delegated to the rendering surface, which
//! must execute the document under [`SANDBOX_TOKENS`].

/// Sandbox capabilities required of the rendering surface: scripts may run;
/// same-origin access, storage, and top-level navigation stay denied.
pub const SANDBOX_TOKENS: &str = "allow-scripts";

/// Compose the preview document: style block in the head, markup in the
/// body, script block last.
pub fn compose_document(html: &str, css: &str, javascript: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <style>{css}</style>\n\
         </head>\n\
         <body>\n\
         {html}\n\
         <script>{javascript}</script>\n\
         </body>\n\
         </html>\n"
    )
}
