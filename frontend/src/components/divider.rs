use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum DividerShape {
    #[default]
    Wave,
    Angle,
    Curve,
}

impl DividerShape {
    fn path(&self) -> &'static str {
        match self {
            DividerShape::Wave => "M0,64 C240,112 480,16 720,48 C960,80 1200,112 1440,64 L1440,120 L0,120 Z",
            DividerShape::Angle => "M0,120 L1440,0 L1440,120 Z",
            DividerShape::Curve => "M0,120 Q720,-40 1440,120 Z",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionDividerProps {
    #[prop_or_default]
    pub shape: DividerShape,
    #[prop_or_default]
    pub flip: bool,
}

#[function_component(SectionDivider)]
pub fn section_divider(props: &SectionDividerProps) -> Html {
    html! {
        <div class={classes!("section-divider", props.flip.then(|| "flipped"))} aria-hidden="true">
            <svg viewBox="0 0 1440 120" preserveAspectRatio="none">
                <path d={props.shape.path()} />
            </svg>
            <style>
                {r#"
                .section-divider {
                    width: 100%;
                    height: 80px;
                    overflow: hidden;
                    line-height: 0;
                }
                .section-divider svg {
                    width: 200%;
                    height: 100%;
                    animation: divider-drift 18s linear infinite;
                }
                .section-divider path {
                    fill: var(--surface);
                }
                .section-divider.flipped {
                    transform: rotate(180deg);
                }
                @keyframes divider-drift {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}
