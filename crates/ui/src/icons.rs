//! Inline SVG glyphs, rendered with `dangerous_inner_html`.

use learnify_core::model::TopicIcon;

pub const MATH_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect><line x1="8" y1="12" x2="16" y2="12"></line><line x1="12" y1="8" x2="12" y2="16"></line>"#,
    "</svg>"
);

pub const ANIMAL_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M12 2a10 10 0 0 0-9.8 11.3c.3 2.4 1.8 4.6 3.8 6.1 2 1.5 4.5 2.6 7 2.6s5-1.1 7-2.6c2-1.5 3.5-3.7 3.8-6.1A10 10 0 0 0 12 2zm0 18c-4.4 0-8-3.6-8-8s3.6-8 8-8 8 3.6 8 8-3.6 8-8 8zM9 12l2 2 4-4"></path>"#,
    r#"<path d="M14.5 10.5c.828 0 1.5-.672 1.5-1.5s-.672-1.5-1.5-1.5-1.5.672-1.5 1.5.672 1.5 1.5 1.5zM9.5 10.5c.828 0 1.5-.672 1.5-1.5s-.672-1.5-1.5-1.5-1.5.672-1.5 1.5.672 1.5 1.5 1.5z"></path>"#,
    r#"<path d="M12 14c-1.657 0-3 1.343-3 3h6c0-1.657-1.343-3-3-3z"></path>"#,
    "</svg>"
);

pub const SPACE_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M12 2.69l.34 2.305a1 1 0 00.93.73l2.42.14a1 1 0 01.99 1.45l-1.76 2.03a1 1 0 00-.3.94l.43 2.5a1 1 0 01-1.45.99l-2.22-1.11a1 1 0 00-1.03 0l-2.22 1.11a1 1 0 01-1.45-.99l.43-2.5a1 1 0 00-.3-.94L3.7 7.31a1 1 0 01.99-1.45l2.42-.14a1 1 0 00.93-.73L12 2.69z"></path>"#,
    r#"<path d="M4.22 10.22l-1.92 1.92M18.8 12.14l1.92-1.92M12 17.8v4.3M12 2.69v-2.3"></path>"#,
    "</svg>"
);

pub const STORY_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path>"#,
    "</svg>"
);

pub const TRENDING_UP_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"></polyline><polyline points="16 7 22 7 22 13"></polyline>"#,
    "</svg>"
);

pub const TROPHY_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/><path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/><path d="M4 22h16"/>"#,
    r#"<path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/><path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/>"#,
    r#"<path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
    "</svg>"
);

#[must_use]
pub const fn topic_icon_svg(icon: TopicIcon) -> &'static str {
    match icon {
        TopicIcon::Math => MATH_ICON,
        TopicIcon::Animal => ANIMAL_ICON,
        TopicIcon::Space => SPACE_ICON,
        TopicIcon::Story => STORY_ICON,
    }
}
