/// Reusable UI components

use crate::classifier::SiteStatus;
use patternfly_yew::prelude::*;
use url::Url;
use yew::prelude::*;

/// Headline shown for a status
pub fn status_title(status: SiteStatus) -> &'static str {
    match status {
        SiteStatus::Starred => "Starred site",
        SiteStatus::Safe => "Safe site",
        SiteStatus::Unsafe => "Unsafe site",
        SiteStatus::PotentiallyUnsafe => "Potentially unsafe site",
        SiteStatus::NoData => "No data",
    }
}

pub fn status_description(status: SiteStatus) -> &'static str {
    match status {
        SiteStatus::Starred => "This site is one of FMHY's starred recommendations.",
        SiteStatus::Safe => "This site is listed on FMHY.",
        SiteStatus::Unsafe => "This site is on the FMHY unsafe list. Avoid it.",
        SiteStatus::PotentiallyUnsafe => "This site is on the FMHY potentially unsafe list. Be careful.",
        SiteStatus::NoData => "This site is not on any FMHY list.",
    }
}

fn alert_type(status: SiteStatus) -> AlertType {
    match status {
        SiteStatus::Starred | SiteStatus::Safe => AlertType::Success,
        SiteStatus::Unsafe => AlertType::Danger,
        SiteStatus::PotentiallyUnsafe => AlertType::Warning,
        SiteStatus::NoData => AlertType::Info,
    }
}

/// Host part of a URL for display, or the URL itself when it has none
pub fn display_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[derive(Properties, PartialEq)]
pub struct StatusCardProps {
    pub status: SiteStatus,
    #[prop_or_default]
    pub url: Option<String>,
}

#[function_component(StatusCard)]
pub fn status_card(props: &StatusCardProps) -> Html {
    html! {
        <div class="status-card">
            <Alert r#type={alert_type(props.status)} title={status_title(props.status)} inline={true}>
                {status_description(props.status)}
            </Alert>
            if let Some(url) = &props.url {
                <p class="status-host" title={url.clone()}>{display_host(url)}</p>
            }
        </div>
    }
}
