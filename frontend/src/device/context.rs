use log::{debug, error, info};
use yew::prelude::*;

use crate::device::classify::{DeviceSnapshot, DeviceType};
use crate::device::listener::ViewportListener;
use crate::device::viewport::{detect_viewport, DeviceBroadcaster};
use crate::error::{require, ScopeError};

#[derive(Properties, PartialEq)]
pub struct DeviceProviderProps {
    pub children: Children,
}

/// Measures the viewport once mounted and keeps every descendant supplied with
/// the latest [`DeviceSnapshot`]. Until then, and whenever effects never run
/// (server rendering), descendants see the default snapshot.
#[function_component(DeviceProvider)]
pub fn device_provider(props: &DeviceProviderProps) -> Html {
    let snapshot = use_state_eq(DeviceSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let broadcaster = DeviceBroadcaster::new(detect_viewport());
                let subscription = broadcaster.subscribe(move |next| {
                    if let Ok(json) = serde_json::to_string(next) {
                        debug!("Device snapshot: {}", json);
                    }
                    snapshot.set(*next);
                });

                let first = broadcaster.refresh();
                info!("Rendering for {:?} ({}x{})", first.device_type, first.width, first.height);

                let listener = ViewportListener::attach(move || {
                    broadcaster.refresh();
                });

                move || {
                    drop(listener);
                    drop(subscription);
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<DeviceSnapshot> context={*snapshot}>
            { for props.children.iter() }
        </ContextProvider<DeviceSnapshot>>
    }
}

#[hook]
pub fn use_device() -> Result<DeviceSnapshot, ScopeError> {
    require(use_context::<DeviceSnapshot>(), "device", "DeviceProvider")
}

/// Which of the two component trees a page should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderVariant {
    Mobile,
    Desktop,
}

impl RenderVariant {
    // Tablets get the desktop layout; only phones switch trees.
    pub fn for_device(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::Mobile => RenderVariant::Mobile,
            DeviceType::Tablet | DeviceType::Desktop => RenderVariant::Desktop,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ResponsiveProps {
    pub mobile: Html,
    pub desktop: Html,
}

#[function_component(Responsive)]
pub fn responsive(props: &ResponsiveProps) -> Html {
    match use_device() {
        Ok(snapshot) => match RenderVariant::for_device(snapshot.device_type) {
            RenderVariant::Mobile => props.mobile.clone(),
            RenderVariant::Desktop => props.desktop.clone(),
        },
        Err(err) => {
            error!("{}", err);
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::classify::classify;

    #[test]
    fn only_phones_get_the_mobile_tree() {
        assert_eq!(RenderVariant::for_device(DeviceType::Mobile), RenderVariant::Mobile);
        assert_eq!(RenderVariant::for_device(DeviceType::Tablet), RenderVariant::Desktop);
        assert_eq!(RenderVariant::for_device(DeviceType::Desktop), RenderVariant::Desktop);
    }

    #[test]
    fn variant_follows_snapshot_width() {
        let phone = classify(375, 812, true);
        let laptop = classify(1440, 900, false);
        assert_eq!(RenderVariant::for_device(phone.device_type), RenderVariant::Mobile);
        assert_eq!(RenderVariant::for_device(laptop.device_type), RenderVariant::Desktop);
    }

    fn trees() -> (Html, Html) {
        (
            html! { <p class="phone-tree">{"phone"}</p> },
            html! { <p class="desk-tree">{"desk"}</p> },
        )
    }

    #[function_component]
    fn Unprovided() -> Html {
        let (mobile, desktop) = trees();
        html! { <Responsive mobile={mobile} desktop={desktop} /> }
    }

    #[function_component]
    fn UnderProvider() -> Html {
        let (mobile, desktop) = trees();
        html! {
            <DeviceProvider>
                <Responsive mobile={mobile} desktop={desktop} />
            </DeviceProvider>
        }
    }

    #[function_component]
    fn UnderPhoneSnapshot() -> Html {
        let (mobile, desktop) = trees();
        html! {
            <ContextProvider<DeviceSnapshot> context={classify(390, 844, true)}>
                <Responsive mobile={mobile} desktop={desktop} />
            </ContextProvider<DeviceSnapshot>>
        }
    }

    #[function_component]
    fn ReportsScope() -> Html {
        match use_device() {
            Ok(snapshot) => html! { <span>{format!("{:?}", snapshot.device_type)}</span> },
            Err(err) => html! { <span>{err.to_string()}</span> },
        }
    }

    #[tokio::test]
    async fn responsive_without_provider_renders_nothing() {
        let rendered = yew::ServerRenderer::<Unprovided>::new().render().await;
        assert!(!rendered.contains("phone-tree"));
        assert!(!rendered.contains("desk-tree"));
    }

    #[tokio::test]
    async fn provider_without_viewport_serves_default_desktop() {
        let rendered = yew::ServerRenderer::<UnderProvider>::new().render().await;
        assert!(rendered.contains("desk-tree"));
        assert!(!rendered.contains("phone-tree"));
    }

    #[tokio::test]
    async fn phone_snapshot_selects_mobile_tree() {
        let rendered = yew::ServerRenderer::<UnderPhoneSnapshot>::new().render().await;
        assert!(rendered.contains("phone-tree"));
        assert!(!rendered.contains("desk-tree"));
    }

    #[tokio::test]
    async fn hook_outside_provider_returns_scope_error() {
        let rendered = yew::ServerRenderer::<ReportsScope>::new().render().await;
        assert!(rendered.contains("was requested outside of"));
        assert!(rendered.contains("DeviceProvider"));
        assert!(!rendered.contains("Desktop"));
    }
}
