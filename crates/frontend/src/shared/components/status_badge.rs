use contracts::domain::a004_jadwal::aggregate::StatusTone;
use leptos::prelude::*;
use thaw::*;

fn badge_style(tone: StatusTone) -> (BadgeAppearance, BadgeColor) {
    match tone {
        StatusTone::Success => (BadgeAppearance::Tint, BadgeColor::Success),
        StatusTone::Warning => (BadgeAppearance::Tint, BadgeColor::Warning),
        StatusTone::Caution => (BadgeAppearance::Tint, BadgeColor::Important),
        StatusTone::Danger => (BadgeAppearance::Tint, BadgeColor::Danger),
        StatusTone::Outline => (BadgeAppearance::Outline, BadgeColor::Brand),
        StatusTone::Neutral => (BadgeAppearance::Tint, BadgeColor::Subtle),
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: StatusTone) -> impl IntoView {
    let (appearance, color) = badge_style(tone);
    view! {
        <Badge appearance=appearance color=color>
            {label}
        </Badge>
    }
}
