//! Debug previews of a finished layout, rendered as a single page PDF.
//!
//! The page is exactly as large as the selection channel, one point per
//! pixel. The selection itself is drawn as a greyscale backdrop, every block
//! row that received words is outlined, and every word is drawn as a filled
//! box. No glyphs are rendered: the preview shows where words went, not what
//! they say.

use crate::colour::{colours, Colour};
use crate::error::BubbleError;
use crate::layout::Assignment;
use crate::mask::Selection;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::transform::Transform;
use crate::units::Px;
use crate::word::WordBox;
use id_arena::Arena;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Filter, Finish, Name, Pdf};
use std::io::Write;

const SELECTION_NAME: &[u8] = b"Sel";

/// How the boxes of a preview are drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewStyle {
    /// Outline colour of each used block row
    pub band: Colour,
    /// Fill and outline colour of each word
    pub word: Colour,
    /// Stroke width, in pixels
    pub line_width: f32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        PreviewStyle {
            band: colours::RED,
            word: colours::SKY,
            line_width: 1.0,
        }
    }
}

/// Render `assignment` on top of `selection` and write the PDF to `w`
pub fn write_preview<W: Write>(
    selection: &Selection,
    words: &Arena<WordBox>,
    assignment: &Assignment,
    style: &PreviewStyle,
    mut w: W,
) -> Result<(), BubbleError> {
    let mut refs = ObjectReferences::new();
    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);
    let page_id = refs.gen(RefType::Page);
    let content_id = refs.gen(RefType::Content);
    let selection_id = refs.gen(RefType::Selection);

    let (width, height) = (selection.width(), selection.height());
    let level = CompressionLevel::DefaultLevel as u8;

    let mut writer = Pdf::new();
    writer.catalog(catalog_id).pages(page_tree_id);
    writer.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = writer.page(page_id);
    page.media_box(Rect::new(Px::ZERO, Px::ZERO, width, height).into());
    page.parent(page_tree_id);
    let mut resources = page.resources();
    let mut resource_xobjects = resources.x_objects();
    resource_xobjects.pair(Name(SELECTION_NAME), selection_id);
    resource_xobjects.finish();
    resources.finish();
    page.contents(content_id);
    page.finish();

    let rendered = render(words, assignment, style, width, height);
    writer
        .stream(content_id, &compress_to_vec_zlib(&rendered, level))
        .filter(Filter::FlateDecode);

    let channel = compress_to_vec_zlib(selection.channel.as_raw(), level);
    let mut image = writer.image_xobject(selection_id, &channel);
    image.filter(Filter::FlateDecode);
    image.width(*width);
    image.height(*height);
    image.color_space().device_gray();
    image.bits_per_component(8);
    image.finish();

    w.write_all(writer.finish().as_slice()).map_err(Into::into)
}

fn render(
    words: &Arena<WordBox>,
    assignment: &Assignment,
    style: &PreviewStyle,
    width: Px,
    height: Px,
) -> Vec<u8> {
    let mut content = Content::new();

    // image space is a unit square, with the first row of the image at the top
    content.save_state();
    Transform::scale(width.into(), height.into()).write_to_content(&mut content);
    content.x_object(Name(SELECTION_NAME));
    content.restore_state();

    content.save_state();
    Transform::flip_y(height).write_to_content(&mut content);
    content.set_line_width(style.line_width);

    style.band.set_stroke(&mut content);
    for row in assignment.rows.iter() {
        let left = row.band.left.unwrap_or_default();
        content.rect(
            left.into(),
            row.band.top.into(),
            row.band.width.into(),
            row.band.height.into(),
        );
    }
    content.stroke();

    style.word.set_fill(&mut content);
    style.word.set_stroke(&mut content);
    for &id in assignment.rows.iter().flat_map(|row| row.words.iter()) {
        let word = &words[id];
        content.rect(
            word.x.into(),
            word.y.into(),
            word.width.into(),
            word.height.into(),
        );
    }
    content.fill_nonzero_and_stroke();
    content.restore_state();

    content.finish()
}
