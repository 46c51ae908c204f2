//! Pagination UI component builders (previous/next buttons).

use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

use super::event::NavControl;

/// Enabled state of the two navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl NavControls {
    /// Build the action row carrying the previous/next buttons.
    pub fn to_components(self) -> Vec<Component> {
        vec![Component::ActionRow(ActionRow {
            id: None,
            components: vec![
                Component::Button(nav_button(NavControl::Previous, self.previous_enabled)),
                Component::Button(nav_button(NavControl::Next, self.next_enabled)),
            ],
        })]
    }
}

fn nav_button(control: NavControl, enabled: bool) -> Button {
    let label = match control {
        NavControl::Previous => "Previous",
        NavControl::Next => "Next",
    };

    Button {
        id: None,
        custom_id: Some(control.custom_id().to_owned()),
        disabled: !enabled,
        emoji: None,
        label: Some(label.to_owned()),
        style: ButtonStyle::Primary,
        url: None,
        sku_id: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn buttons(controls: NavControls) -> Vec<Button> {
        let components = controls.to_components();
        let [Component::ActionRow(row)] = components.as_slice() else {
            panic!("expected a single action row");
        };

        row.components
            .iter()
            .map(|component| match component {
                Component::Button(button) => button.clone(),
                other => panic!("unexpected component: {other:?}"),
            })
            .collect()
    }

    #[test]
    fn first_page_disables_previous_only() {
        let buttons = buttons(NavControls {
            previous_enabled: false,
            next_enabled: true,
        });

        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].custom_id.as_deref(), Some("previous"));
        assert_eq!(buttons[0].label.as_deref(), Some("Previous"));
        assert!(buttons[0].disabled);
        assert_eq!(buttons[1].custom_id.as_deref(), Some("next"));
        assert!(!buttons[1].disabled);
    }

    #[test]
    fn last_page_disables_next_only() {
        let buttons = buttons(NavControls {
            previous_enabled: true,
            next_enabled: false,
        });

        assert!(!buttons[0].disabled);
        assert!(buttons[1].disabled);
        assert!(buttons.iter().all(|button| button.style == ButtonStyle::Primary));
    }
}
