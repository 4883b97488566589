//! HTML adapter for [`PageView`].
//!
//! Every control is a plain form post, so the page works without scripts.
//! Hidden cards stay in the markup with the `hide` class.

use products_directory::{CardView, GalleryView, OverlayView, PageView, VisibleCard};

const TITLE: &str = "Employee Directory";

pub fn render_page(view: &PageView) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/styles.css\">\n\
         </head>\n<body>\n"
    ));
    render_header(&mut out, &view.query);
    render_gallery(&mut out, &view.gallery);
    if let Some(overlay) = &view.overlay {
        render_overlay(&mut out, overlay);
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, query: &str) {
    out.push_str(&format!(
        "<header>\n<div class=\"header-inner-container\">\n\
         <div class=\"header-text-container\"><h1>{TITLE}</h1></div>\n\
         <div class=\"search-container\">\n\
         <form action=\"/search\" method=\"post\">\n\
         <input type=\"search\" id=\"search-input\" name=\"search-input\" class=\"search-input\" \
         placeholder=\"Search...\" value=\"{query}\">\n\
         <input type=\"submit\" value=\"&#x1F50D;\" id=\"search-submit\" class=\"search-submit\">\n\
         </form>\n</div>\n</div>\n</header>\n",
        query = escape(query),
    ));
}

fn render_gallery(out: &mut String, gallery: &GalleryView) {
    out.push_str("<div id=\"gallery\" class=\"gallery\">\n");
    match gallery {
        GalleryView::Loaded { cards } => {
            for card in cards {
                render_card(out, card);
            }
        }
        GalleryView::Failed { message } => {
            out.push_str(&format!("<h3>{}</h3>\n", escape(message)));
        }
    }
    out.push_str("</div>\n");
}

fn render_card(out: &mut String, entry: &VisibleCard) {
    let VisibleCard { card, visible } = entry;
    let CardView {
        id,
        name,
        email,
        location,
        thumbnail,
    } = card;
    let id = escape(id.as_str());
    out.push_str(&format!(
        "<form class=\"card {class}\" id=\"{id}\" action=\"/cards/open\" method=\"post\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <button type=\"submit\" class=\"card-button\">\n\
         <span class=\"card-img-container\"><img class=\"card-img\" src=\"{thumbnail}\" alt=\"profile picture\"></span>\n\
         <span class=\"card-info-container\">\n\
         <span class=\"card-name cap\">{name}</span>\n\
         <span class=\"card-text\">{email}</span>\n\
         <span class=\"card-text cap\">{location}</span>\n\
         </span>\n</button>\n</form>\n",
        class = if *visible { "show" } else { "hide" },
        thumbnail = escape(thumbnail),
        name = escape(name),
        email = escape(email),
        location = escape(location),
    ));
}

fn render_overlay(out: &mut String, overlay: &OverlayView) {
    out.push_str(&format!(
        "<div class=\"modal-container\" data-employee=\"{id}\">\n<div class=\"modal\">\n\
         <form action=\"/overlay/close\" method=\"post\">\
         <button type=\"submit\" id=\"modal-close-btn\" class=\"modal-close-btn\"><strong>X</strong></button>\
         </form>\n\
         <div class=\"modal-info-container\">\n\
         <img class=\"modal-img\" src=\"{picture}\" alt=\"profile picture\">\n\
         <h3 class=\"modal-name cap\">{name}</h3>\n\
         <p class=\"modal-text\">{email}</p>\n\
         <p class=\"modal-text cap\">{city}</p>\n\
         <hr>\n\
         <p class=\"modal-text\">{cell}</p>\n\
         <p class=\"modal-text\">{address}</p>\n\
         <p class=\"modal-text\">Birthday: {birth_date}</p>\n\
         </div>\n</div>\n\
         <div class=\"modal-btn-container\">\n\
         <form action=\"/overlay/prev\" method=\"post\">\
         <button type=\"submit\" id=\"modal-prev\" class=\"modal-prev btn{prev_edge}\">Prev</button></form>\n\
         <form action=\"/overlay/next\" method=\"post\">\
         <button type=\"submit\" id=\"modal-next\" class=\"modal-next btn{next_edge}\">Next</button></form>\n\
         </div>\n</div>\n",
        id = escape(overlay.id.as_str()),
        picture = escape(&overlay.picture),
        name = escape(&overlay.name),
        email = escape(&overlay.email),
        city = escape(&overlay.city),
        cell = escape(&overlay.cell),
        address = escape(&overlay.address),
        birth_date = escape(&overlay.birth_date),
        prev_edge = if overlay.has_prev { "" } else { " is-edge" },
        next_edge = if overlay.has_next { "" } else { " is-edge" },
    ));
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
