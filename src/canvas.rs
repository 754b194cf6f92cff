use crate::{
    error::BubbleError,
    layout::{self, Assignment, LayoutOptions},
    mask::Selection,
    preview::{self, PreviewStyle},
    rect::Rect,
    units::Px,
    word::WordBox,
};
use id_arena::{Arena, Id};
use std::io::Write;

#[derive(Default)]
/// A canvas holds the current selection (the speech bubble) along with every
/// word that has been added to it, and positions the words inside the bubble
/// with a call to [Canvas::bubblify]
pub struct Canvas {
    pub selection: Option<Selection>,
    pub words: Arena<WordBox>,
    pub word_order: Vec<Id<WordBox>>,
}

impl Canvas {
    /// Create an empty canvas with the given speech bubble selected
    pub fn new(selection: Selection) -> Canvas {
        Canvas {
            selection: Some(selection),
            ..Default::default()
        }
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Add a word to the end of the canvas' reading order, returning its ID.
    pub fn add_word(&mut self, word: WordBox) -> Id<WordBox> {
        let id = self.words.alloc(word);
        self.word_order.push(id);
        id
    }

    /// Split `text` on whitespace and add each word to the canvas, sized by
    /// `measure`, which returns the `(width, height)` of a word.
    pub fn add_text<F>(&mut self, text: &str, mut measure: F) -> Vec<Id<WordBox>>
    where
        F: FnMut(&str) -> (Px, Px),
    {
        text.split_whitespace()
            .map(|word| {
                let (width, height) = measure(word);
                self.add_word(WordBox::new(word, width, height))
            })
            .collect()
    }

    /// Remove words from the reading order. They stay in the arena, so their
    /// IDs stay valid, but they will no longer be laid out.
    pub fn remove_words(&mut self, ids: &[Id<WordBox>]) {
        self.word_order.retain(|id| !ids.contains(id));
    }

    /// Get the 0-based position of a word in the reading order
    pub fn index_of_word(&self, word: Id<WordBox>) -> Option<usize> {
        self.word_order.iter().position(|&w| w == word)
    }

    /// Lay out every word in the reading order inside the selection.
    ///
    /// Fails with [BubbleError::NoSelection] before doing anything else if
    /// the canvas has no selection or nothing is selected.
    pub fn bubblify(&mut self, options: &LayoutOptions) -> Result<Assignment, BubbleError> {
        let Canvas {
            selection,
            words,
            word_order,
        } = self;
        let (selection, bounds) = selected_area(selection.as_ref())?;
        layout::layout(selection, bounds, words, word_order, options)
    }

    /// Add `text` to the canvas and lay out just its words inside the
    /// selection. If they can't be laid out, the words are removed from the
    /// reading order again before the error is returned. Like any removed
    /// word they are still kept in [Canvas::words], so every failed call
    /// grows the arena.
    pub fn bubblify_text<F>(
        &mut self,
        text: &str,
        measure: F,
        options: &LayoutOptions,
    ) -> Result<Assignment, BubbleError>
    where
        F: FnMut(&str) -> (Px, Px),
    {
        let (_, bounds) = selected_area(self.selection.as_ref())?;

        let added = self.add_text(text, measure);
        let Canvas {
            selection, words, ..
        } = self;
        let selection = selection.as_ref().ok_or(BubbleError::NoSelection)?;
        let result = layout::layout(selection, bounds, words, &added, options);
        if result.is_err() {
            log::debug!("removing {} words that didn't fit", added.len());
            self.remove_words(&added);
        }
        result
    }

    /// Write a PDF preview of `assignment` over the current selection
    pub fn write_preview<W: Write>(
        &self,
        assignment: &Assignment,
        style: &PreviewStyle,
        w: W,
    ) -> Result<(), BubbleError> {
        let selection = self.selection.as_ref().ok_or(BubbleError::NoSelection)?;
        preview::write_preview(selection, &self.words, assignment, style, w)
    }
}

/// The selection along with the bounds of its selected pixels
fn selected_area(selection: Option<&Selection>) -> Result<(&Selection, Rect), BubbleError> {
    let selection = selection.ok_or(BubbleError::NoSelection)?;
    let bounds = selection.bounds().ok_or(BubbleError::NoSelection)?;
    Ok((selection, bounds))
}
