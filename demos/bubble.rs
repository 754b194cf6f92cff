use bubblify::layout::LayoutOptions;
use bubblify::preview::PreviewStyle;
use bubblify::{Canvas, Px, Selection};
use image::{GrayImage, Luma};

fn main() {
    env_logger::init();

    // use the selection image given on the command line, or draw a bubble
    let selection = match std::env::args().nth(1) {
        Some(path) => Selection::from_path(path).expect("can load selection"),
        None => Selection::new(GrayImage::from_fn(480, 320, |x, y| {
            let (dx, dy) = (x as f32 - 240.0, y as f32 - 160.0);
            let inside = dx * dx / (230.0 * 230.0) + dy * dy / (150.0 * 150.0) <= 1.0;
            Luma([if inside { 255 } else { 0 }])
        })),
    };

    let mut canvas = Canvas::new(selection);
    let text = lipsum::lipsum(30);
    let options = LayoutOptions::new().space_width(Px(10)).clone();
    let assignment = canvas
        .bubblify_text(&text, |word| (Px(9 * word.len() as i32), Px(20)), &options)
        .expect("text fits in the bubble");

    println!(
        "laid out {} words over {} rows",
        canvas.word_order.len(),
        assignment.band_count
    );

    let mut out = std::fs::File::create("bubble.pdf").unwrap();
    canvas
        .write_preview(&assignment, &PreviewStyle::default(), &mut out)
        .unwrap();
}
