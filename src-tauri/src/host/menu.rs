//! Turns a [`MenuNode`] tree into a native Tauri menu.

use crate::menu::{MenuCommand, MenuNode, MenuRole};
use crate::platform::MenuConvention;
use tauri::menu::{Menu, MenuItem, MenuItemKind, PredefinedMenuItem, Submenu};
use tauri::{AppHandle, Wry};

pub fn build_menu(
    app: &AppHandle,
    nodes: &[MenuNode],
    convention: MenuConvention,
) -> tauri::Result<Menu<Wry>> {
    let menu = Menu::new(app)?;
    for node in nodes {
        menu.append(&build_item(app, node, convention)?)?;
    }
    Ok(menu)
}

fn build_item(
    app: &AppHandle,
    node: &MenuNode,
    convention: MenuConvention,
) -> tauri::Result<MenuItemKind<Wry>> {
    let item = match node {
        MenuNode::Separator => MenuItemKind::Predefined(PredefinedMenuItem::separator(app)?),
        MenuNode::Role(role) => match predefined(app, *role, convention)? {
            Some(native) => MenuItemKind::Predefined(native),
            None => MenuItemKind::MenuItem(custom_item(app, MenuCommand::Role(*role))?),
        },
        MenuNode::Action(action) => {
            MenuItemKind::MenuItem(custom_item(app, MenuCommand::Action(*action))?)
        }
        MenuNode::Submenu { label, items } => {
            let submenu = Submenu::new(app, label, true)?;
            for child in items {
                submenu.append(&build_item(app, child, convention)?)?;
            }
            MenuItemKind::Submenu(submenu)
        }
    };
    Ok(item)
}

fn custom_item(app: &AppHandle, command: MenuCommand) -> tauri::Result<MenuItem<Wry>> {
    let (label, accelerator) = match command {
        MenuCommand::Role(role) => (role.label(), role.accelerator()),
        MenuCommand::Action(action) => (action.label(), action.accelerator()),
    };
    MenuItem::with_id(app, command.id(), label, true, accelerator)
}

/// Whether the platform menu toolkit has a working built-in item for `role`.
///
/// Clipboard items work everywhere; the rest are macOS-only in muda and get
/// emulated elsewhere.
fn is_native(role: MenuRole, convention: MenuConvention) -> bool {
    match role {
        MenuRole::Cut | MenuRole::Copy | MenuRole::Paste | MenuRole::SelectAll => true,
        MenuRole::Undo
        | MenuRole::Redo
        | MenuRole::Minimize
        | MenuRole::Close
        | MenuRole::Zoom
        | MenuRole::ToggleFullscreen
        | MenuRole::About
        | MenuRole::Services
        | MenuRole::Hide
        | MenuRole::HideOthers
        | MenuRole::Unhide
        | MenuRole::Quit => convention == MenuConvention::MacOs,
        MenuRole::PasteAndMatchStyle
        | MenuRole::Delete
        | MenuRole::Reload
        | MenuRole::ForceReload
        | MenuRole::ToggleDevTools
        | MenuRole::ResetZoom
        | MenuRole::ZoomIn
        | MenuRole::ZoomOut
        | MenuRole::Front
        | MenuRole::StartSpeaking
        | MenuRole::StopSpeaking => false,
    }
}

fn predefined(
    app: &AppHandle,
    role: MenuRole,
    convention: MenuConvention,
) -> tauri::Result<Option<PredefinedMenuItem<Wry>>> {
    if !is_native(role, convention) {
        return Ok(None);
    }
    let item = match role {
        MenuRole::Cut => PredefinedMenuItem::cut(app, None)?,
        MenuRole::Copy => PredefinedMenuItem::copy(app, None)?,
        MenuRole::Paste => PredefinedMenuItem::paste(app, None)?,
        MenuRole::SelectAll => PredefinedMenuItem::select_all(app, None)?,
        MenuRole::Undo => PredefinedMenuItem::undo(app, None)?,
        MenuRole::Redo => PredefinedMenuItem::redo(app, None)?,
        MenuRole::Minimize => PredefinedMenuItem::minimize(app, None)?,
        MenuRole::Close => PredefinedMenuItem::close_window(app, None)?,
        MenuRole::Zoom => PredefinedMenuItem::maximize(app, None)?,
        MenuRole::ToggleFullscreen => PredefinedMenuItem::fullscreen(app, None)?,
        MenuRole::About => PredefinedMenuItem::about(app, None, None)?,
        MenuRole::Services => PredefinedMenuItem::services(app, None)?,
        MenuRole::Hide => PredefinedMenuItem::hide(app, None)?,
        MenuRole::HideOthers => PredefinedMenuItem::hide_others(app, None)?,
        MenuRole::Unhide => PredefinedMenuItem::show_all(app, None)?,
        MenuRole::Quit => PredefinedMenuItem::quit(app, None)?,
        MenuRole::PasteAndMatchStyle
        | MenuRole::Delete
        | MenuRole::Reload
        | MenuRole::ForceReload
        | MenuRole::ToggleDevTools
        | MenuRole::ResetZoom
        | MenuRole::ZoomIn
        | MenuRole::ZoomOut
        | MenuRole::Front
        | MenuRole::StartSpeaking
        | MenuRole::StopSpeaking => return Ok(None),
    };
    Ok(Some(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::menu_template;

    #[test]
    fn test_clipboard_roles_native_everywhere() {
        for role in [MenuRole::Cut, MenuRole::Copy, MenuRole::Paste, MenuRole::SelectAll] {
            assert!(is_native(role, MenuConvention::Standard));
            assert!(is_native(role, MenuConvention::MacOs));
        }
    }

    #[test]
    fn test_window_roles_emulated_off_macos() {
        assert!(!is_native(MenuRole::Minimize, MenuConvention::Standard));
        assert!(!is_native(MenuRole::Undo, MenuConvention::Standard));
        assert!(is_native(MenuRole::Minimize, MenuConvention::MacOs));
    }

    #[test]
    fn test_emulated_roles_are_never_native() {
        for role in [MenuRole::Reload, MenuRole::ZoomIn, MenuRole::StartSpeaking, MenuRole::Front] {
            assert!(!is_native(role, MenuConvention::MacOs));
        }
    }

    #[test]
    fn test_every_emulated_item_resolves_back_to_its_command() {
        for convention in [MenuConvention::Standard, MenuConvention::MacOs] {
            let template = menu_template("Storatron", convention);
            let emulated = template
                .iter()
                .flat_map(MenuNode::commands)
                .filter(|command| match command {
                    MenuCommand::Role(role) => !is_native(*role, convention),
                    MenuCommand::Action(_) => true,
                });
            for command in emulated {
                assert_eq!(MenuCommand::from_id(command.id()), Some(command));
            }
        }
    }
}
