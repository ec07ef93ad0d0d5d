// HTML adapter: renders a widget's current state as embeddable markup

use super::widget::PlaylistWidget;

pub const ACTIVE_CLASS: &str = "ypm_active";

const PLAYER_WIDTH: u32 = 560;
const PLAYER_HEIGHT: u32 = 315;

/// Escapes: & < > " '
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Player iframe plus the item list, with the active entry marked
pub fn render(widget: &PlaylistWidget) -> String {
    let items: String = widget
        .entries()
        .map(|(entry, active)| {
            let class = if active {
                format!("ypm_video_items {}", ACTIVE_CLASS)
            } else {
                "ypm_video_items".to_string()
            };
            format!(
                "<li><a class=\"{}\" href=\"#\" data-id=\"{}\"><img src=\"{}\" /><p>{}</p></a></li>",
                class,
                escape_html(&entry.item.video_id),
                escape_html(&entry.item.thumbnail_url),
                escape_html(&entry.item.title),
            )
        })
        .collect();

    format!(
        "<div class=\"ypm_youtube-video-playlist\" data-playlist=\"{}\">\
         <div class=\"ypm_video-player\">\
         <iframe class=\"ypm_iframe\" src=\"{}\" width=\"{}\" height=\"{}\" frameborder=\"0\" allowfullscreen></iframe>\
         </div>\
         <div class=\"ypm_video-list-wrapper\"><ul class=\"ypm_video-list\">{}</ul></div>\
         </div>",
        escape_html(widget.playlist_id()),
        escape_html(widget.player_src().unwrap_or("")),
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        items,
    )
}
