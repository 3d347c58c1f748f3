// Static HTML generation.
// `registry` maps a template id to its generator, `document` is the shared driver
// every generator runs through, `export` adds the size gate and file naming.
// Everything below `handlers` is pure and synchronous.

pub mod document;
pub mod export;
pub mod fonts;
pub mod handlers;
pub mod registry;
pub mod sanitize;
pub mod templates;

