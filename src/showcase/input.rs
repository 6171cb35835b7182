use raylib::prelude::KeyboardKey;
use crate::layout::Hit;
use crate::menu::Menu;
use crate::state::SlideEvent;

// Menu clicks only change the menu
pub fn route_click(hit: Hit, menu: &mut Menu) -> Option<SlideEvent> {
    match hit {
        Hit::Previous => Some(SlideEvent::Previous),
        Hit::Next => Some(SlideEvent::Next),
        Hit::Indicator(i) => Some(SlideEvent::Select(i)),
        Hit::MenuButton => {
            menu.toggle();
            None
        }
        Hit::MenuLink(i) => menu.activate(i),
        Hit::None => None,
    }
}

pub fn route_key(key: KeyboardKey, menu: &mut Menu) -> Option<SlideEvent> {
    let digit = key as i32 - KeyboardKey::KEY_ONE as i32;
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(SlideEvent::Next),
        KeyboardKey::KEY_LEFT => Some(SlideEvent::Previous),
        KeyboardKey::KEY_M => {
            menu.toggle();
            None
        }
        KeyboardKey::KEY_ESCAPE => {
            menu.close();
            None
        }
        _ if (0..9).contains(&digit) => Some(SlideEvent::Select(digit as usize)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn arrows_and_dots_emit_events() {
        let mut m = menu();
        assert_eq!(route_click(Hit::Previous, &mut m), Some(SlideEvent::Previous));
        assert_eq!(route_click(Hit::Next, &mut m), Some(SlideEvent::Next));
        assert_eq!(route_click(Hit::Indicator(2), &mut m), Some(SlideEvent::Select(2)));
        assert_eq!(route_click(Hit::None, &mut m), None);
    }

    #[test]
    fn menu_button_toggles_and_link_closes() {
        let mut m = menu();
        assert_eq!(route_click(Hit::MenuButton, &mut m), None);
        assert!(m.is_open());
        assert_eq!(route_click(Hit::MenuLink(1), &mut m), Some(SlideEvent::Select(1)));
        assert!(!m.is_open());
    }

    #[test]
    fn keys_map_to_events() {
        let mut m = menu();
        assert_eq!(route_key(KeyboardKey::KEY_RIGHT, &mut m), Some(SlideEvent::Next));
        assert_eq!(route_key(KeyboardKey::KEY_SPACE, &mut m), Some(SlideEvent::Next));
        assert_eq!(route_key(KeyboardKey::KEY_LEFT, &mut m), Some(SlideEvent::Previous));
        assert_eq!(route_key(KeyboardKey::KEY_ONE, &mut m), Some(SlideEvent::Select(0)));
        assert_eq!(route_key(KeyboardKey::KEY_THREE, &mut m), Some(SlideEvent::Select(2)));
        assert_eq!(route_key(KeyboardKey::KEY_A, &mut m), None);
    }

    #[test]
    fn menu_keys() {
        let mut m = menu();
        route_key(KeyboardKey::KEY_M, &mut m);
        assert!(m.is_open());
        route_key(KeyboardKey::KEY_ESCAPE, &mut m);
        assert!(!m.is_open());
    }
}
