// PDF rendering for resumes (A4, built-in Helvetica)
use std::path::Path;

use printpdf::image_crate::{self, DynamicImage};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use crate::errors::AppError;
use crate::matching::skills::split_skills;
use crate::resume::form::ResumeForm;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const PHOTO_WIDTH: f32 = 30.0;

const NAME_SIZE: f32 = 22.0;
const ROLE_SIZE: f32 = 13.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 11.0;
const CONTACT_SIZE: f32 = 10.0;

const LINE_HEIGHT: f32 = 5.5;
/// Characters per line for body text at 11pt across the printable width.
const WRAP_CHARS: usize = 88;

/// Tracks the write position and starts a new page when the current one is full.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl<'a> PageCursor<'a> {
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed >= MARGIN {
            return;
        }
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn text(&mut self, text: &str, size: f32, font: &IndirectFontRef, advance: f32) {
        self.ensure_room(advance);
        self.y -= advance;
        self.layer
            .use_text(text, size, Mm(MARGIN), Mm(self.y), font);
    }

    fn skip(&mut self, gap: f32) {
        self.y -= gap;
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::Pdf(e.to_string())
}

/// Renders a resume as PDF bytes. `photo_path` must point at a PNG or JPEG.
pub fn render_resume(form: &ResumeForm, photo_path: Option<&Path>) -> Result<Vec<u8>, AppError> {
    let title = if form.name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", form.name)
    };

    let (doc, page1, layer1) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
    };

    let first_layer = doc.get_page(page1).get_layer(layer1);
    let photo_bottom = match photo_path {
        Some(path) => Some(place_photo(path, &first_layer)?),
        None => None,
    };

    let mut cursor = PageCursor {
        doc: &doc,
        layer: first_layer,
        y: PAGE_HEIGHT - MARGIN,
        pages: 1,
    };

    write_header(&mut cursor, form, &fonts);
    if let Some(bottom) = photo_bottom {
        cursor.y = cursor.y.min(bottom - LINE_HEIGHT);
    }

    write_section(&mut cursor, &fonts, "Summary", &form.summary);
    let skills = split_skills(&form.skills).join(", ");
    write_section(&mut cursor, &fonts, "Skills", &skills);
    write_section(&mut cursor, &fonts, "Experience", &form.experience);
    write_section(&mut cursor, &fonts, "Education", &form.education);

    doc.save_to_bytes().map_err(pdf_error)
}

/// Draws the photo in the top-right corner. Returns its bottom edge in mm.
fn place_photo(path: &Path, layer: &PdfLayerReference) -> Result<f32, AppError> {
    let decoded = image_crate::open(path)
        .map_err(|e| AppError::Pdf(format!("Could not decode photo: {e}")))?;
    // Alpha channels are flattened; PDF image XObjects here are plain RGB.
    let buffer = decoded.to_rgb8();
    let (width_px, height_px) = (buffer.width(), buffer.height());
    let rgb = DynamicImage::ImageRgb8(buffer);

    let dpi = width_px as f32 * 25.4 / PHOTO_WIDTH;
    let height_mm = height_px as f32 * 25.4 / dpi;
    let bottom = PAGE_HEIGHT - MARGIN - height_mm;

    Image::from_dynamic_image(&rgb).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(PAGE_WIDTH - MARGIN - PHOTO_WIDTH)),
            translate_y: Some(Mm(bottom)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    Ok(bottom)
}

fn write_header(cursor: &mut PageCursor<'_>, form: &ResumeForm, fonts: &Fonts) {
    let name = if form.name.is_empty() { "Resume" } else { &form.name };
    cursor.text(name, NAME_SIZE, &fonts.bold, 9.0);

    if !form.role.is_empty() {
        cursor.text(&form.role, ROLE_SIZE, &fonts.regular, 7.0);
    }

    let contact = contact_line(form);
    if !contact.is_empty() {
        for line in wrap_text(&contact, WRAP_CHARS) {
            cursor.text(&line, CONTACT_SIZE, &fonts.regular, LINE_HEIGHT);
        }
    }
    cursor.skip(4.0);
}

fn write_section(cursor: &mut PageCursor<'_>, fonts: &Fonts, heading: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    // Keep a heading together with at least its first line.
    cursor.ensure_room(8.0 + LINE_HEIGHT);
    cursor.text(heading, HEADING_SIZE, &fonts.bold, 8.0);
    for line in wrap_text(body, WRAP_CHARS) {
        if line.is_empty() {
            cursor.skip(LINE_HEIGHT / 2.0);
        } else {
            cursor.text(&line, BODY_SIZE, &fonts.regular, LINE_HEIGHT);
        }
    }
    cursor.skip(4.0);
}

/// "email | phone | linkedin", skipping empty parts.
pub fn contact_line(form: &ResumeForm) -> String {
    [&form.email, &form.phone, &form.linkedin]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Greedy word wrap. Explicit newlines are kept; blank lines become "".
/// Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                let piece: String = chunk.iter().collect();
                let needed = if current.is_empty() {
                    piece.chars().count()
                } else {
                    current.chars().count() + 1 + piece.chars().count()
                };
                if needed > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&piece);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
