//! Declarative application menu.
//!
//! The menu is plain data built by [`menu_template`]; the host adapter turns
//! it into native menus and feeds clicks back as [`MenuCommand`]s.

use crate::platform::MenuConvention;

/// Standard actions the menu exposes without custom code of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuRole {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    PasteAndMatchStyle,
    Delete,
    SelectAll,
    Reload,
    ForceReload,
    ToggleDevTools,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,
    Minimize,
    Close,
    Zoom,
    Front,
    About,
    Services,
    Hide,
    HideOthers,
    Unhide,
    Quit,
    StartSpeaking,
    StopSpeaking,
}

impl MenuRole {
    pub const ALL: [MenuRole; 27] = [
        Self::Undo,
        Self::Redo,
        Self::Cut,
        Self::Copy,
        Self::Paste,
        Self::PasteAndMatchStyle,
        Self::Delete,
        Self::SelectAll,
        Self::Reload,
        Self::ForceReload,
        Self::ToggleDevTools,
        Self::ResetZoom,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ToggleFullscreen,
        Self::Minimize,
        Self::Close,
        Self::Zoom,
        Self::Front,
        Self::About,
        Self::Services,
        Self::Hide,
        Self::HideOthers,
        Self::Unhide,
        Self::Quit,
        Self::StartSpeaking,
        Self::StopSpeaking,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Undo => "role.undo",
            Self::Redo => "role.redo",
            Self::Cut => "role.cut",
            Self::Copy => "role.copy",
            Self::Paste => "role.paste",
            Self::PasteAndMatchStyle => "role.paste-and-match-style",
            Self::Delete => "role.delete",
            Self::SelectAll => "role.select-all",
            Self::Reload => "role.reload",
            Self::ForceReload => "role.force-reload",
            Self::ToggleDevTools => "role.toggle-devtools",
            Self::ResetZoom => "role.reset-zoom",
            Self::ZoomIn => "role.zoom-in",
            Self::ZoomOut => "role.zoom-out",
            Self::ToggleFullscreen => "role.toggle-fullscreen",
            Self::Minimize => "role.minimize",
            Self::Close => "role.close",
            Self::Zoom => "role.zoom",
            Self::Front => "role.front",
            Self::About => "role.about",
            Self::Services => "role.services",
            Self::Hide => "role.hide",
            Self::HideOthers => "role.hide-others",
            Self::Unhide => "role.unhide",
            Self::Quit => "role.quit",
            Self::StartSpeaking => "role.start-speaking",
            Self::StopSpeaking => "role.stop-speaking",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Cut => "Cut",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::PasteAndMatchStyle => "Paste and Match Style",
            Self::Delete => "Delete",
            Self::SelectAll => "Select All",
            Self::Reload => "Reload",
            Self::ForceReload => "Force Reload",
            Self::ToggleDevTools => "Toggle Developer Tools",
            Self::ResetZoom => "Actual Size",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::ToggleFullscreen => "Toggle Full Screen",
            Self::Minimize => "Minimize",
            Self::Close => "Close Window",
            Self::Zoom => "Zoom",
            Self::Front => "Bring All to Front",
            Self::About => "About",
            Self::Services => "Services",
            Self::Hide => "Hide",
            Self::HideOthers => "Hide Others",
            Self::Unhide => "Show All",
            Self::Quit => "Quit",
            Self::StartSpeaking => "Start Speaking",
            Self::StopSpeaking => "Stop Speaking",
        }
    }

    /// Shortcut used when the role is rendered as a custom item.
    pub fn accelerator(self) -> Option<&'static str> {
        match self {
            Self::Undo => Some("CmdOrCtrl+Z"),
            Self::Redo => Some("CmdOrCtrl+Shift+Z"),
            Self::Cut => Some("CmdOrCtrl+X"),
            Self::Copy => Some("CmdOrCtrl+C"),
            Self::Paste => Some("CmdOrCtrl+V"),
            Self::PasteAndMatchStyle => Some("CmdOrCtrl+Shift+Alt+V"),
            Self::SelectAll => Some("CmdOrCtrl+A"),
            Self::Reload => Some("CmdOrCtrl+R"),
            Self::ForceReload => Some("CmdOrCtrl+Shift+R"),
            Self::ToggleDevTools => Some("CmdOrCtrl+Alt+I"),
            Self::ResetZoom => Some("CmdOrCtrl+0"),
            Self::ZoomIn => Some("CmdOrCtrl+Plus"),
            Self::ZoomOut => Some("CmdOrCtrl+-"),
            Self::ToggleFullscreen => Some("F11"),
            Self::Minimize => Some("CmdOrCtrl+M"),
            Self::Close => Some("CmdOrCtrl+W"),
            Self::Quit => Some("CmdOrCtrl+Q"),
            Self::Delete
            | Self::Zoom
            | Self::Front
            | Self::About
            | Self::Services
            | Self::Hide
            | Self::HideOthers
            | Self::Unhide
            | Self::StartSpeaking
            | Self::StopSpeaking => None,
        }
    }
}

/// Menu items that run shell code instead of a standard role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Preferences,
    CheckForUpdates,
    LearnMore,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [Self::Preferences, Self::CheckForUpdates, Self::LearnMore];

    pub fn id(self) -> &'static str {
        match self {
            Self::Preferences => "action.preferences",
            Self::CheckForUpdates => "action.check-for-updates",
            Self::LearnMore => "action.learn-more",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Preferences => "Preferences",
            Self::CheckForUpdates => "Check for Updates...",
            Self::LearnMore => "Learn More",
        }
    }

    pub fn accelerator(self) -> Option<&'static str> {
        match self {
            Self::Preferences => Some("CmdOrCtrl+,"),
            Self::CheckForUpdates | Self::LearnMore => None,
        }
    }
}

/// A clicked menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Role(MenuRole),
    Action(MenuAction),
}

impl MenuCommand {
    pub fn id(self) -> &'static str {
        match self {
            Self::Role(role) => role.id(),
            Self::Action(action) => action.id(),
        }
    }

    /// Resolve a menu item id produced by [`MenuCommand::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        MenuRole::ALL
            .into_iter()
            .find(|role| role.id() == id)
            .map(Self::Role)
            .or_else(|| {
                MenuAction::ALL
                    .into_iter()
                    .find(|action| action.id() == id)
                    .map(Self::Action)
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Separator,
    Role(MenuRole),
    Action(MenuAction),
    Submenu { label: String, items: Vec<MenuNode> },
}

impl MenuNode {
    pub fn submenu(label: &str, items: Vec<MenuNode>) -> Self {
        Self::Submenu { label: label.to_string(), items }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Submenu { label, .. } => Some(label.as_str()),
            Self::Role(role) => Some(role.label()),
            Self::Action(action) => Some(action.label()),
            Self::Separator => None,
        }
    }

    pub fn items(&self) -> &[MenuNode] {
        match self {
            Self::Submenu { items, .. } => items,
            Self::Separator | Self::Role(_) | Self::Action(_) => &[],
        }
    }

    /// Every command reachable from this node, depth first.
    pub fn commands(&self) -> Vec<MenuCommand> {
        match self {
            Self::Separator => Vec::new(),
            Self::Role(role) => vec![MenuCommand::Role(*role)],
            Self::Action(action) => vec![MenuCommand::Action(*action)],
            Self::Submenu { items, .. } => items.iter().flat_map(MenuNode::commands).collect(),
        }
    }
}

fn roles(items: &[Option<MenuRole>]) -> Vec<MenuNode> {
    items
        .iter()
        .map(|item| item.map_or(MenuNode::Separator, MenuNode::Role))
        .collect()
}

fn edit_menu(convention: MenuConvention) -> MenuNode {
    let mut items = roles(&[
        Some(MenuRole::Undo),
        Some(MenuRole::Redo),
        None,
        Some(MenuRole::Cut),
        Some(MenuRole::Copy),
        Some(MenuRole::Paste),
        Some(MenuRole::PasteAndMatchStyle),
        Some(MenuRole::Delete),
        Some(MenuRole::SelectAll),
    ]);

    if convention == MenuConvention::MacOs {
        items.push(MenuNode::Separator);
        items.push(MenuNode::submenu(
            "Speech",
            roles(&[Some(MenuRole::StartSpeaking), Some(MenuRole::StopSpeaking)]),
        ));
    }

    MenuNode::submenu("Edit", items)
}

fn view_menu() -> MenuNode {
    MenuNode::submenu(
        "View",
        roles(&[
            Some(MenuRole::Reload),
            Some(MenuRole::ForceReload),
            Some(MenuRole::ToggleDevTools),
            None,
            Some(MenuRole::ResetZoom),
            Some(MenuRole::ZoomIn),
            Some(MenuRole::ZoomOut),
            None,
            Some(MenuRole::ToggleFullscreen),
        ]),
    )
}

fn window_menu(convention: MenuConvention) -> MenuNode {
    let items = match convention {
        MenuConvention::Standard => roles(&[Some(MenuRole::Minimize), Some(MenuRole::Close)]),
        MenuConvention::MacOs => roles(&[
            Some(MenuRole::Close),
            Some(MenuRole::Minimize),
            Some(MenuRole::Zoom),
            None,
            Some(MenuRole::Front),
        ]),
    };
    MenuNode::submenu("Window", items)
}

fn help_menu() -> MenuNode {
    MenuNode::submenu("Help", vec![MenuNode::Action(MenuAction::LearnMore)])
}

fn app_menu(app_name: &str) -> MenuNode {
    MenuNode::submenu(
        app_name,
        vec![
            MenuNode::Role(MenuRole::About),
            MenuNode::Action(MenuAction::CheckForUpdates),
            MenuNode::Separator,
            MenuNode::Action(MenuAction::Preferences),
            MenuNode::Separator,
            MenuNode::Role(MenuRole::Services),
            MenuNode::Separator,
            MenuNode::Role(MenuRole::Hide),
            MenuNode::Role(MenuRole::HideOthers),
            MenuNode::Role(MenuRole::Unhide),
            MenuNode::Separator,
            MenuNode::Role(MenuRole::Quit),
        ],
    )
}

/// Build the top-level menu bar for a platform convention.
pub fn menu_template(app_name: &str, convention: MenuConvention) -> Vec<MenuNode> {
    let mut menu = Vec::with_capacity(5);
    if convention == MenuConvention::MacOs {
        menu.push(app_menu(app_name));
    }
    menu.push(edit_menu(convention));
    menu.push(view_menu());
    menu.push(window_menu(convention));
    menu.push(help_menu());
    menu
}
