//! Display labels for placements, tables and exports

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

impl Lang {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Self::En),
            "ja" | "japanese" => Some(Self::Ja),
            _ => None,
        }
    }

    /// Value of the `lang` attribute in HTML exports
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    pub fn desktop(self) -> &'static str {
        match self {
            Self::En => "Desktop",
            Self::Ja => "デスクトップ",
        }
    }

    pub fn dock(self) -> &'static str {
        match self {
            Self::En => "Dock",
            Self::Ja => "ドック",
        }
    }

    pub fn drawer(self) -> &'static str {
        match self {
            Self::En => "App drawer",
            Self::Ja => "アプリドロワー",
        }
    }

    pub fn drawer_tab(self) -> &'static str {
        match self {
            Self::En => "App drawer (tab)",
            Self::Ja => "アプリドロワー（タブ）",
        }
    }

    /// A drawer folder that lives inside the tab `parent`
    pub fn drawer_tab_child(self, parent: &str) -> String {
        match self {
            Self::En => format!("App drawer (tab: {})", parent),
            Self::Ja => format!("アプリドロワー（タブ：{}）", parent),
        }
    }

    pub fn unnamed_folder(self, id: i64) -> String {
        match self {
            Self::En => format!("(unnamed folder) (id={})", id),
            Self::Ja => format!("(無名のフォルダ) (ID: {})", id),
        }
    }

    pub fn unknown(self, id: i64) -> String {
        match self {
            Self::En => format!("Unknown (id={})", id),
            Self::Ja => format!("不明 (ID: {})", id),
        }
    }

    /// CSV header: kind, name, affiliation
    pub fn csv_header(self) -> [&'static str; 3] {
        match self {
            Self::En => ["kind", "name", "affiliation"],
            Self::Ja => ["種別", "名前", "所属"],
        }
    }

    pub fn kind_folder(self) -> &'static str {
        match self {
            Self::En => "Folder",
            Self::Ja => "フォルダ",
        }
    }

    pub fn kind_app(self) -> &'static str {
        match self {
            Self::En => "App/Shortcut",
            Self::Ja => "アプリ/ショートカット",
        }
    }

    pub fn folders_title(self) -> &'static str {
        match self {
            Self::En => "Folders",
            Self::Ja => "フォルダ一覧",
        }
    }

    pub fn apps_title(self) -> &'static str {
        match self {
            Self::En => "Apps & Shortcuts",
            Self::Ja => "アプリ・ショートカット一覧",
        }
    }

    pub fn folder_columns(self) -> [&'static str; 2] {
        match self {
            Self::En => ["Folder", "Affiliation"],
            Self::Ja => ["フォルダ名", "所属"],
        }
    }

    pub fn app_columns(self) -> [&'static str; 2] {
        match self {
            Self::En => ["Name", "Affiliation"],
            Self::Ja => ["名前", "所属"],
        }
    }

    pub fn apps_note(self) -> &'static str {
        match self {
            Self::En => {
                "Apps placed in several locations are listed once per location. \
                 Click a header to sort by that column."
            }
            Self::Ja => {
                "※所属が複数の場合、アプリ名は重複して表示されます。\
                 ヘッダーをクリックすると「名前」「所属」で並べ替えできます。"
            }
        }
    }
}
