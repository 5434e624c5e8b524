/// The fixed set of glyphs the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Activity,
    BookOpen,
    Brain,
    Briefcase,
    CheckCircle,
    Circle,
    Code,
    Database,
    FileCheck,
    FileText,
    GitMerge,
    Hammer,
    HelpCircle,
    Loader,
    Navigation,
    Newspaper,
    PenTool,
    Play,
    Search,
    Server,
    ShieldAlert,
    Stethoscope,
    TestTube,
    Train,
    TrendingUp,
    User,
    UserCheck,
}

/// Symbolic icon names accepted in scenario data.
const GLYPH_TABLE: &[(&str, Glyph)] = &[
    ("Activity", Glyph::Activity),
    ("BookOpen", Glyph::BookOpen),
    ("Brain", Glyph::Brain),
    ("Briefcase", Glyph::Briefcase),
    ("CheckCircle", Glyph::CheckCircle),
    ("Circle", Glyph::Circle),
    ("Code", Glyph::Code),
    ("Database", Glyph::Database),
    ("FileCheck", Glyph::FileCheck),
    ("FileText", Glyph::FileText),
    ("GitMerge", Glyph::GitMerge),
    ("Hammer", Glyph::Hammer),
    ("HelpCircle", Glyph::HelpCircle),
    ("Loader2", Glyph::Loader),
    ("Navigation", Glyph::Navigation),
    ("Newspaper", Glyph::Newspaper),
    ("PenTool", Glyph::PenTool),
    ("Play", Glyph::Play),
    ("Search", Glyph::Search),
    ("Server", Glyph::Server),
    ("ShieldAlert", Glyph::ShieldAlert),
    ("Stethoscope", Glyph::Stethoscope),
    ("TestTube", Glyph::TestTube),
    ("Train", Glyph::Train),
    ("TrendingUp", Glyph::TrendingUp),
    ("User", Glyph::User),
    ("UserCheck", Glyph::UserCheck),
];

impl Glyph {
    /// Fallback for names missing from the table.
    pub const FALLBACK: Glyph = Glyph::HelpCircle;

    /// Resolves a symbolic icon name, falling back to [`Glyph::FALLBACK`].
    pub fn lookup(name: &str) -> Glyph {
        GLYPH_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, glyph)| *glyph)
            .unwrap_or(Self::FALLBACK)
    }

    /// The canonical symbolic name of the glyph.
    pub fn name(&self) -> &'static str {
        GLYPH_TABLE
            .iter()
            .find(|(_, glyph)| glyph == self)
            .map(|(key, _)| *key)
            .unwrap_or("HelpCircle")
    }

    /// Text symbol drawn inside the node shape.
    pub fn symbol(&self) -> char {
        match self {
            Glyph::Activity => '⌇',
            Glyph::BookOpen => '📖',
            Glyph::Brain => '🧠',
            Glyph::Briefcase => '💼',
            Glyph::CheckCircle => '✔',
            Glyph::Circle => '●',
            Glyph::Code => '⌨',
            Glyph::Database => '⛁',
            Glyph::FileCheck => '🗹',
            Glyph::FileText => '🗎',
            Glyph::GitMerge => '⑂',
            Glyph::Hammer => '🔨',
            Glyph::HelpCircle => '?',
            Glyph::Loader => '◌',
            Glyph::Navigation => '➤',
            Glyph::Newspaper => '📰',
            Glyph::PenTool => '✒',
            Glyph::Play => '▶',
            Glyph::Search => '🔍',
            Glyph::Server => '🖧',
            Glyph::ShieldAlert => '⛨',
            Glyph::Stethoscope => '⚕',
            Glyph::TestTube => '🧪',
            Glyph::Train => '🚆',
            Glyph::TrendingUp => '📈',
            Glyph::User => '👤',
            Glyph::UserCheck => '☑',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_round_trips_through_its_name() {
        for (name, glyph) in GLYPH_TABLE {
            assert_eq!(Glyph::lookup(name), *glyph);
            assert_eq!(glyph.name(), *name);
        }
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(Glyph::lookup("Unicorn"), Glyph::HelpCircle);
        assert_eq!(Glyph::lookup(""), Glyph::HelpCircle);
    }
}
