/// A journal or think tank that has published the analyst's work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outlet {
    pub name: &'static str,
}

const OUTLETS: [Outlet; 4] = [
    Outlet { name: "The Diplomat" },
    Outlet { name: "The Jamestown Foundation" },
    Outlet { name: "Council on Geostrategy" },
    Outlet { name: "China Observers in Central and Eastern Europe (CHOICE)" },
];

/// Outlets in the order the biography lists them.
pub fn outlets() -> &'static [Outlet] {
    &OUTLETS
}
