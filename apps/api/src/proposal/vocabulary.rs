//! Questionnaire vocabulary: every selectable option with its Polish and
//! English label, grouped the way the forms present them.
//!
//! The server does not reject tags outside this catalog. It is used to render
//! the forms and to label tags in the fallback proposal.

use std::borrow::Cow;

use crate::proposal::request::Lang;

/// A phrase in both supported languages.
#[derive(Debug, Clone, Copy)]
pub struct Text {
    pub pl: &'static str,
    pub en: &'static str,
}

impl Text {
    pub fn get(&self, lang: Lang) -> &'static str {
        lang.pick(self.pl, self.en)
    }
}

/// One checkbox or radio option.
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub id: &'static str,
    pub label: Text,
    pub detail: Option<Text>,
}

/// A set of options posted under one JSON field.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceGroup {
    /// camelCase field name in the request body.
    pub field: &'static str,
    pub title: Text,
    /// `false` renders as a single-choice radio group posting a string.
    pub multiple: bool,
    pub choices: &'static [Choice],
}

/// A numbered block of the questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: Text,
    pub description: Text,
    pub groups: &'static [ChoiceGroup],
}

const fn text(pl: &'static str, en: &'static str) -> Text {
    Text { pl, en }
}

const fn choice(id: &'static str, pl: &'static str, en: &'static str) -> Choice {
    Choice {
        id,
        label: text(pl, en),
        detail: None,
    }
}

const fn scenario(id: &'static str, title: Text, detail: Text) -> Choice {
    Choice {
        id,
        label: title,
        detail: Some(detail),
    }
}

const fn group(field: &'static str, title: Text, choices: &'static [Choice]) -> ChoiceGroup {
    ChoiceGroup {
        field,
        title,
        multiple: true,
        choices,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cooperation questionnaire
// ────────────────────────────────────────────────────────────────────────────

const AREA_GROUPS: &[ChoiceGroup] = &[
    group(
        "areasOfCooperation",
        text(
            "A. Wizualna prezentacja marki Diasen Polska",
            "A. Visual Brand Presentation - Diasen Poland",
        ),
        &[
            choice(
                "materialy_marketingowe_ekskluzywne",
                "Ekskluzywne materiały marketingowe z realizacji (foto / wideo)",
                "Exclusive marketing materials from realizations (photo / video)",
            ),
            choice(
                "dokumentacja_projektow_editorial",
                "Dokumentacja projektów w stylu editorial",
                "Project documentation in editorial style",
            ),
            choice(
                "kampanie_wizerunkowe_social_media",
                "Kreacja kampanii wizerunkowych i treści do social media",
                "Creation of brand campaigns and social media content",
            ),
            choice(
                "materialy_dla_diasen",
                "Tworzenie materiałów dla Diasen Polska",
                "Creating materials for Diasen Poland",
            ),
            choice(
                "prezentacje_produktow_polskie_projekty",
                "Prezentacje produktów w realnych polskich projektach",
                "Product presentations in real Polish projects",
            ),
            choice(
                "otwarci_wizualna_prezentacja",
                "Jesteśmy otwarci na współpracę w tym obszarze",
                "We are open to cooperation in this area",
            ),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "B. Ambasadorskie działania kreatywne",
            "B. Creative Ambassador Activities",
        ),
        &[
            choice(
                "rola_ambasadora_marki",
                "Rola Ambasadora Marki Diasen Polska",
                "Role of Diasen Poland Brand Ambassador",
            ),
            choice(
                "niezalezna_kreacja_materialow",
                "Niezależna kreacja materiałów marketingowych",
                "Independent creation of marketing materials",
            ),
            choice(
                "wspolpraca_dzial_marketing",
                "Współpraca z działem marketingu Diasen Polska",
                "Cooperation with Diasen Poland marketing department",
            ),
            choice(
                "budowanie_narracji_wizualnej",
                "Budowanie narracji wizualnej (brand storytelling)",
                "Building visual narrative (brand storytelling)",
            ),
            choice(
                "kampanie_technologia_projekty",
                "Kampanie łączące technologię Diasen z moimi projektami",
                "Campaigns connecting Diasen technology with my projects",
            ),
            choice("otwarci_ambasadorskie", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "C. Murale i realizacje artystyczne",
            "C. Murals and Artistic Realizations",
        ),
        &[
            choice(
                "murale_wewnetrzne_ekskluzywne",
                "Ekskluzywne murale wewnętrzne",
                "Exclusive interior murals",
            ),
            choice(
                "murale_elewacyjne_ekskluzywne",
                "Ekskluzywne murale elewacyjne",
                "Exclusive facade murals",
            ),
            choice(
                "murale_expo_targi_wydarzenia",
                "Murale na expo, targach i wydarzeniach",
                "Murals at expo, fairs and events",
            ),
            choice(
                "ekspozycje_przestrzen_publiczna",
                "Unikalne ekspozycje w przestrzeni publicznej",
                "Unique exhibitions in public space",
            ),
            choice("otwarci_murale", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "D. Działania ekspozycyjne, eventowe i edukacyjne",
            "D. Exhibition, Event and Educational Activities",
        ),
        &[
            choice(
                "targi_expo_showroomy_polska",
                "Udział w polskich targach, expo i showroomach",
                "Participation in Polish fairs, expo and showrooms",
            ),
            choice(
                "instalacje_wizualne_wydarzenia",
                "Instalacje wizualne na wydarzenia branżowe",
                "Visual installations for industry events",
            ),
            choice(
                "szkolenia_architekci_wykonawcy",
                "Szkolenia dla architektów, wykonawców i deweloperów",
                "Training for architects, contractors and developers",
            ),
            choice(
                "webinary_live_polska",
                "Webinary / live'y dla odbiorców w Polsce",
                "Webinars / lives for recipients in Poland",
            ),
            choice(
                "eventy_tematyczne_tworcy",
                "Eventy tematyczne z udziałem twórców",
                "Thematic events with creators participation",
            ),
            choice("otwarci_ekspozycyjne", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "E. Rozszerzona współpraca biznesowa",
            "E. Extended Business Cooperation",
        ),
        &[
            choice(
                "wspolpraca_niezalezny_partner",
                "Współpraca jako niezależny partner",
                "Cooperation as independent partner",
            ),
            choice(
                "stala_wspolpraca_konsultant",
                "Stała współpraca jako konsultant kreatywny",
                "Permanent cooperation as creative consultant",
            ),
            choice(
                "kampanie_kwartalne_polroczne",
                "Kampanie kwartalne / półroczne",
                "Quarterly / semi-annual campaigns",
            ),
            choice(
                "prezentacje_deweloperzy",
                "Prezentacje produktów Diasen u deweloperów",
                "Diasen product presentations to developers",
            ),
            choice(
                "doradztwo_kreatywne_klienci",
                "Doradztwo kreatywne dla klientów",
                "Creative consulting for clients",
            ),
            choice("otwarci_biznesowa", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "F. Materiały edukacyjne i świadomościowe (dla szerokiej publiczności w Polsce)",
            "F. Educational and Awareness Materials (for general public in Poland)",
        ),
        &[
            choice(
                "kampanie_akustyka_mieszkan",
                "Kampanie o akustyce mieszkań",
                "Campaigns about apartment acoustics",
            ),
            choice(
                "materialy_zdrowe_wnetrza",
                "Materiały o zdrowych wnętrzach i mikroklimacie",
                "Materials about healthy interiors and microclimate",
            ),
            choice(
                "tresci_storytelling_odbiorcy",
                "Treści storytellingowe dla zwykłych odbiorców",
                "Storytelling content for ordinary recipients",
            ),
            choice(
                "serie_edukacyjne_reelsy",
                "Serie edukacyjne: reelsy, grafiki, krótkie filmy",
                "Educational series: reels, graphics, short films",
            ),
            choice(
                "porownania_produktow_typowe",
                "Porównania produktów Diasen z typowymi materiałami",
                "Comparisons of Diasen products with typical materials",
            ),
            choice(
                "kampanie_nowe_mieszkania",
                "Kampanie dla nowych mieszkań i rodzin",
                "Campaigns for new apartments and families",
            ),
            choice(
                "akcja_ulotkowa_probka_farby",
                "Ogólnokrajowa akcja ulotkowa z próbką farby",
                "Nationwide leaflet campaign with paint sample",
            ),
            choice(
                "ulotki_edukacyjne_korek",
                "Ulotki edukacyjne o korku (zdrowie, akustyka, mikroklimat)",
                "Educational leaflets about cork (health, acoustics, microclimate)",
            ),
            choice(
                "dystrybucja_osiedla_sklepy",
                "Dystrybucja na osiedlach, showroomach, w sklepach",
                "Distribution in housing estates, showrooms, stores",
            ),
            choice(
                "ulotki_qr_kody",
                "Ulotki z QR kodami (filmy, poradniki, galerie)",
                "Leaflets with QR codes (videos, guides, galleries)",
            ),
            choice(
                "ogolnokrajowa_kampania",
                "Ogólnokrajowa kampania informacyjna",
                "Nationwide information campaign",
            ),
            choice("otwarci_edukacyjne", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "G. Social Media — Kreacja, Strategia i Prowadzenie (Diasen Polska)",
            "G. Social Media — Creation, Strategy and Management (Diasen Poland)",
        ),
        &[
            choice(
                "prowadzenie_oficjalne_profile",
                "Prowadzenie oficjalnych profili Diasen Polska",
                "Managing official Diasen Poland profiles",
            ),
            choice(
                "wspolprowadzenie_sm_marketing",
                "Współprowadzenie SM z działem marketingu",
                "Co-managing SM with marketing department",
            ),
            choice(
                "produkcja_tresci_premium",
                "Produkcja treści premium: foto, wideo, reels",
                "Premium content production: photo, video, reels",
            ),
            choice(
                "budowa_spojnej_estetyki",
                "Budowa spójnej estetyki SM",
                "Building coherent SM aesthetics",
            ),
            choice(
                "serie_edukacyjne_sm",
                "Serie edukacyjne pod social media",
                "Educational series for social media",
            ),
            choice(
                "strategia_komunikacji_polska",
                "Strategia komunikacji na polski rynek",
                "Communication strategy for Polish market",
            ),
            choice(
                "wsparcie_eventy_targi",
                "Wsparcie podczas eventów i targów",
                "Support during events and fairs",
            ),
            choice("otwarci_social_media", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "areasOfCooperation",
        text(
            "H. Utworzenie lub współtworzenie działu marketingowego Diasen Polska",
            "H. Creation or Co-creation of Diasen Poland Marketing Department",
        ),
        &[
            choice(
                "stworzenie_dzial_od_podstaw",
                "Stworzenie od podstaw działu marketingu Diasen Polska",
                "Creating Diasen Poland marketing department from scratch",
            ),
            choice(
                "wspoltworzenie_lider_kreatywny",
                "Współtworzenie działu jako lider kreatywny",
                "Co-creating department as creative leader",
            ),
            choice(
                "udzial_konsultant_wspolprowadzacy",
                "Udział jako konsultant lub współprowadzący",
                "Participation as consultant or co-manager",
            ),
            choice(
                "strategia_wizerunek_rynek_pl",
                "Opracowanie pełnej strategii wizerunku na rynek PL",
                "Developing full brand strategy for PL market",
            ),
            choice(
                "wsparcie_kampanie_marketingowe",
                "Wsparcie przy kampaniach i działaniach marketingowych",
                "Support with campaigns and marketing activities",
            ),
            choice(
                "budowa_brand_book_polski",
                "Budowa polskiego brand booka Diasen",
                "Building Polish Diasen brand book",
            ),
            choice(
                "rekrutacja_selekcja_wspolpracownicy",
                "Rekrutacja lub selekcja współpracowników",
                "Recruitment or selection of collaborators",
            ),
            choice("otwarci_dzial_marketingu", "Jesteśmy otwarci", "We are open"),
        ],
    ),
];

const MODEL_GROUPS: &[ChoiceGroup] = &[
    group(
        "cooperationModel",
        text("1. Preferowany model współpracy", "1. Preferred cooperation model"),
        &[
            choice("projektowy", "Projektowy (per projekt)", "Project-based (per project)"),
            choice("staly", "Stały (miesięczny / retainer)", "Permanent (monthly / retainer)"),
            choice("okresowy", "Okresowy (kwartał / pół roku)", "Periodic (quarter / half year)"),
            choice("mieszany", "Mieszany (stała część + projekty)", "Mixed (fixed part + projects)"),
            choice("otwarci_model", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "billingForm",
        text("2. Forma rozliczeń", "2. Billing form"),
        &[
            choice("miesieczna", "Miesięczna", "Monthly"),
            choice("kwartalna", "Kwartalna", "Quarterly"),
            choice("polroczna", "Półroczna", "Semi-annual"),
            choice("jednorazowa", "Jednorazowa (per kampania)", "One-time (per campaign)"),
            choice("otwarci_rozliczenia", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "engagementScope",
        text("3. Zakres zaangażowania", "3. Engagement scope"),
        &[
            choice(
                "dostepnosc_projektowa",
                "Dostępność projektowa (ad-hoc)",
                "Project availability (ad-hoc)",
            ),
            choice(
                "stala_dostepnosc",
                "Stała dostępność (określony wymiar godzin)",
                "Permanent availability (specified hours)",
            ),
            choice(
                "intensywna_kampania",
                "Intensywna praca w czasie kampanii",
                "Intensive work during campaigns",
            ),
            choice("doradztwo_kreatywne", "Doradztwo kreatywne", "Creative consulting"),
            choice("otwarci_zaangażowanie", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "teamIntegrationLevel",
        text("4. Poziom integracji z zespołem", "4. Team integration level"),
        &[
            choice("praca_niezalezna", "Praca niezależna", "Independent work"),
            choice(
                "wspolpraca_dzial_marketingu",
                "Praca we współpracy z działem marketingu",
                "Work in cooperation with marketing department",
            ),
            choice(
                "wspolne_dzialania_projekty",
                "Wspólne działania przy projektach",
                "Joint activities on projects",
            ),
            choice("otwarci_integracja", "Jesteśmy otwarci", "We are open"),
        ],
    ),
    group(
        "additionalPreferences",
        text("5. Preferencje dodatkowe", "5. Additional preferences"),
        &[
            choice("raporty_dzialan", "Raporty z działań", "Activity reports"),
            choice("spojana_linia_kreatywna", "Spójna linia kreatywna", "Consistent creative line"),
            choice(
                "budowanie_spolecznosci",
                "Budowanie społeczności (architekci, wykonawcy)",
                "Community building (architects, contractors)",
            ),
            choice("otwarci_preferencje", "Jesteśmy otwarci", "We are open"),
        ],
    ),
];

const SCENARIO_GROUPS: &[ChoiceGroup] = &[group(
    "selectedScenarios",
    text("Scenariusze", "Scenarios"),
    &[
        scenario(
            "scenariusz_1",
            text(
                "SCENARIUSZ 1 — Marketingowo-Ambasadorski",
                "SCENARIO 1 — Marketing-Ambassador",
            ),
            text(
                "Stała produkcja treści foto/wideo • Kampanie wizerunkowe • Rola ambasadora • Dokumentacja projektów • Storytelling marki",
                "Continuous photo/video content production • Brand campaigns • Ambassador role • Project documentation • Brand storytelling",
            ),
        ),
        scenario(
            "scenariusz_2",
            text(
                "SCENARIUSZ 2 — Artystyczno-Eventowy",
                "SCENARIO 2 — Artistic-Event",
            ),
            text(
                "Murale wewnętrzne i fasadowe • Murale na wydarzeniach • Instalacje • Rozliczenia projektowe",
                "Interior and facade murals • Event murals • Installations • Project-based billing",
            ),
        ),
        scenario(
            "scenariusz_3",
            text(
                "SCENARIUSZ 3 — Kreatywno-Marketingowy",
                "SCENARIO 3 — Creative-Marketing",
            ),
            text(
                "Art + marketing • Prowadzenie social media • Treści premium • Storytelling • Elastyczne rozliczenia",
                "Art + marketing • Social media management • Premium content • Storytelling • Flexible billing",
            ),
        ),
        scenario(
            "scenariusz_4",
            text(
                "SCENARIUSZ 4 — Rozwój Regionalny i Edukacja",
                "SCENARIO 4 — Regional Development and Education",
            ),
            text(
                "Szkolenia dla architektów • Budowanie społeczności • Prezentacje dla deweloperów",
                "Architect training • Community building • Developer presentations",
            ),
        ),
        scenario(
            "scenariusz_5",
            text(
                "SCENARIUSZ 5 — Minimalny Start (Light)",
                "SCENARIO 5 — Minimal Start (Light)",
            ),
            text(
                "Pojedyncze projekty/kampanie • Możliwość rozszerzenia współpracy",
                "Single projects/campaigns • Possibility to expand cooperation",
            ),
        ),
        scenario(
            "scenariusz_6",
            text(
                "SCENARIUSZ 6 — Ogólnokrajowa Kampania Edukacyjna",
                "SCENARIO 6 — Nationwide Educational Campaign",
            ),
            text(
                "Akcja ulotkowa z próbkami farb • Edukacja o akustyce • Dystrybucja • Materiały edukacyjne",
                "Leaflet campaign with paint samples • Acoustics education • Distribution • Educational materials",
            ),
        ),
        scenario(
            "scenariusz_7",
            text(
                "SCENARIUSZ 7 — Kampanie Świadomościowe",
                "SCENARIO 7 — Awareness Campaigns",
            ),
            text(
                "Serie edukacyjne • Analiza problemów mieszkań • Edukacja dla odbiorców",
                "Educational series • Apartment problem analysis • Recipient education",
            ),
        ),
        scenario(
            "scenariusz_8",
            text(
                "SCENARIUSZ 8 — Utworzenie Działu Marketingu",
                "SCENARIO 8 — Marketing Department Creation",
            ),
            text(
                "Stworzenie działu od zera • Kierunek kreatywny • Brand book PL • Rekrutacja",
                "Creating department from zero • Creative direction • PL brand book • Recruitment",
            ),
        ),
    ],
)];

/// Sections of the cooperation questionnaire, in page order.
pub const COOPERATION_FORM: &[Section] = &[
    Section {
        title: text(
            "SEKCJA 1 — Wybór obszarów współpracy",
            "SECTION 1 — Areas of Cooperation Selection",
        ),
        description: text(
            "Proszę zaznaczyć obszary współpracy, które są dla Państwa interesujące.",
            "Please select areas of cooperation that are interesting to you.",
        ),
        groups: AREA_GROUPS,
    },
    Section {
        title: text(
            "SEKCJA 2 — Model współpracy i zaangażowania",
            "SECTION 2 — Cooperation Model and Engagement",
        ),
        description: text(
            "Proszę wybrać preferowany sposób współpracy i formę rozliczeń.",
            "Please select your preferred cooperation method and billing form.",
        ),
        groups: MODEL_GROUPS,
    },
    Section {
        title: text(
            "SEKCJA 3 — Proponowane scenariusze współpracy",
            "SECTION 3 — Proposed Cooperation Scenarios",
        ),
        description: text(
            "Można wybrać jedną lub kilka opcji. Finalna oferta połączy wybrane elementy.",
            "You can select one or several options. The final offer will combine the selected elements.",
        ),
        groups: SCENARIO_GROUPS,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Module questionnaire
// ────────────────────────────────────────────────────────────────────────────

const MODULE_GROUPS: &[ChoiceGroup] = &[group(
    "modules",
    text("Moduły", "Modules"),
    &[
        choice(
            "strategie_marki",
            "Uporządkowanie strategii marki i komunikacji",
            "Brand strategy organization",
        ),
        choice(
            "pozycjonowanie_premium",
            "Wizerunek premium / pozycjonowanie marki",
            "Premium image / brand positioning",
        ),
        choice(
            "wejscie_na_rynki",
            "Strategia wejścia na nowe rynki",
            "New market entry strategy",
        ),
        choice(
            "konsultacje_kreatywne",
            "Konsultacje kreatywne + kierunek wizualny",
            "Creative consultations + visual direction",
        ),
        choice(
            "materialy_editorial",
            "Editorialowe zdjęcia projektów",
            "Editorial project photography",
        ),
        choice(
            "video_krotkie_formy",
            "Krótkie formy wideo / reels",
            "Short video formats / reels",
        ),
        choice("wizualizacje_3d", "Wizualizacje 3D produktów", "3D product visualizations"),
        choice(
            "dokumentacja_realizacji",
            "Dokumentacja realizacji",
            "Project documentation",
        ),
        choice(
            "biblioteka_zdjec",
            "Biblioteka zdjęć produktów",
            "Product photo library",
        ),
        choice("kampania_pilotazowa", "Kampania pilotażowa", "Pilot campaign"),
        choice(
            "content_dla_architektow",
            "Content dla architektów",
            "Content for architects",
        ),
        choice("kampanie_edukacyjne", "Kampanie edukacyjne", "Educational campaigns"),
        choice(
            "pr_publikacje",
            "PR i publikacje branżowe",
            "PR and industry publications",
        ),
    ],
)];

const GOAL_GROUPS: &[ChoiceGroup] = &[
    group(
        "goals",
        text("Cele biznesowe", "Business goals"),
        &[
            choice(
                "rozpoznawalnosc",
                "Zwiększenie rozpoznawalności marki",
                "Increase brand recognition",
            ),
            choice(
                "dotarcie_architekci",
                "Dotarcie do biur architektonicznych",
                "Reach architectural offices",
            ),
            choice("prestiz_marki", "Podniesienie prestiżu marki", "Increase brand prestige"),
            choice(
                "wyróżnienie_technologia",
                "Wyróżnienie się technologią",
                "Stand out with technology",
            ),
            choice(
                "wzrost_popytu",
                "Zwiększenie popytu na produkty",
                "Increase product demand",
            ),
            choice("portfolio_realizacji", "Portfolio realizacji", "Portfolio of projects"),
            choice(
                "wejscie_rynek_polska",
                "Pozycja na rynku polskim",
                "Position in Polish market",
            ),
            choice("wejscie_rynek_eu", "Rozwój europejski", "European development"),
        ],
    ),
    group(
        "markets",
        text("Rynki docelowe", "Target markets"),
        &[
            choice("polska", "Polska", "Poland"),
            choice("europa_srodkowa", "Europa Środkowa", "Central Europe"),
            choice("dach", "Niemcy, Austria, Szwajcaria", "Germany, Austria, Switzerland"),
            choice("skandynawia", "Skandynawia", "Scandinavia"),
            choice("wielka_brytania", "Wielka Brytania", "United Kingdom"),
        ],
    ),
    group(
        "activities",
        text("Planowane działania", "Planned activities"),
        &[
            choice("sesje_zdjeciowe", "Sesje zdjęciowe realizacji", "Project photo shoots"),
            choice("produkcja_wideo", "Produkcja wideo", "Video production"),
            choice(
                "warsztaty_architekci",
                "Warsztaty dla architektów",
                "Workshops for architects",
            ),
            choice("targi_eventy", "Targi i eventy", "Fairs and events"),
            choice(
                "publikacje_branzowe",
                "Publikacje branżowe",
                "Industry publications",
            ),
        ],
    ),
];

/// Refund mechanism is a single choice posted as a plain string.
const REFUND_GROUPS: &[ChoiceGroup] = &[ChoiceGroup {
    field: "refundMechanism",
    title: text("Mechanizm zwrotu kosztów", "Refund mechanism"),
    multiple: false,
    choices: &[
        choice("brak", "Bez mechanizmu zwrotu", "No refund mechanism"),
        choice(
            "zwrot_czesciowy",
            "Częściowy zwrot po fazie pilotażowej",
            "Partial refund after the pilot phase",
        ),
        choice(
            "kredyt_na_dzialania",
            "Zwrot jako kredyt na kolejne działania",
            "Refund as credit towards further work",
        ),
        choice("do_ustalenia", "Do ustalenia", "To be agreed"),
    ],
}];

/// Sections of the module questionnaire, in page order.
pub const MODULES_FORM: &[Section] = &[
    Section {
        title: text("SEKCJA 1 — Moduły współpracy", "SECTION 1 — Cooperation modules"),
        description: text(
            "Proszę zaznaczyć moduły, które mają znaleźć się w ofercie.",
            "Please select the modules the offer should include.",
        ),
        groups: MODULE_GROUPS,
    },
    Section {
        title: text("SEKCJA 2 — Cele i rynki", "SECTION 2 — Goals and markets"),
        description: text(
            "Cele biznesowe, rynki docelowe i planowane działania.",
            "Business goals, target markets and planned activities.",
        ),
        groups: GOAL_GROUPS,
    },
    Section {
        title: text("SEKCJA 3 — Model rozliczeń", "SECTION 3 — Billing model"),
        description: text(
            "Preferowana forma rozliczeń i mechanizm zwrotu kosztów.",
            "Preferred billing form and refund mechanism.",
        ),
        groups: REFUND_GROUPS,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

fn all_groups() -> impl Iterator<Item = &'static ChoiceGroup> {
    COOPERATION_FORM
        .iter()
        .chain(MODULES_FORM.iter())
        .flat_map(|section| section.groups.iter())
}

/// Finds a catalog entry by id across both questionnaires.
pub fn find(id: &str) -> Option<&'static Choice> {
    all_groups()
        .flat_map(|group| group.choices.iter())
        .find(|choice| choice.id == id)
}

/// Display label for a tag. Unknown tags are shown with spaces for underscores.
pub fn label(id: &str, lang: Lang) -> Cow<'static, str> {
    match find(id) {
        Some(choice) => Cow::Borrowed(choice.label.get(lang)),
        None => Cow::Owned(id.replace('_', " ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_across_catalog() {
        let mut seen = HashSet::new();
        for choice in all_groups().flat_map(|g| g.choices.iter()) {
            assert!(seen.insert(choice.id), "duplicate id {}", choice.id);
        }
    }

    #[test]
    fn test_every_choice_has_both_labels() {
        for choice in all_groups().flat_map(|g| g.choices.iter()) {
            assert!(!choice.label.pl.is_empty(), "{} missing pl", choice.id);
            assert!(!choice.label.en.is_empty(), "{} missing en", choice.id);
        }
    }

    #[test]
    fn test_cooperation_form_has_eight_areas_and_eight_scenarios() {
        let areas = COOPERATION_FORM[0].groups;
        assert_eq!(areas.len(), 8);
        assert!(areas.iter().all(|g| g.field == "areasOfCooperation"));

        let scenarios = COOPERATION_FORM[2].groups[0];
        assert_eq!(scenarios.field, "selectedScenarios");
        assert_eq!(scenarios.choices.len(), 8);
        assert!(scenarios.choices.iter().all(|c| c.detail.is_some()));
    }

    #[test]
    fn test_label_known_tag() {
        assert_eq!(label("miesieczna", Lang::Pl), "Miesięczna");
        assert_eq!(label("miesieczna", Lang::En), "Monthly");
    }

    #[test]
    fn test_label_unknown_tag_replaces_underscores() {
        assert_eq!(label("custom_area_x", Lang::En), "custom area x");
    }

    #[test]
    fn test_refund_group_is_single_choice() {
        let refund = MODULES_FORM[2].groups[0];
        assert_eq!(refund.field, "refundMechanism");
        assert!(!refund.multiple);
    }
}
