//! DSX: Schlitzdurchlass.

use crate::{
    AUSFUEHRUNG, Describe, EINZEL_BAND, Fallback, FieldCatalog, FieldSpec, FieldWidth, Family,
    Shape, ValueRule,
};

/// Field catalog for `DSX` codes (12 fields).
pub static DSX: FieldCatalog = FieldCatalog {
    family: Family::Dsx,
    example: "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0",
    fields: &[
        FieldSpec {
            name: "Typ",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of(&["DSX"]),
            default: "DSX",
            describe: Describe::table(&[("DSX", "Schlitzdurchlass DSX")]),
        },
        FieldSpec {
            name: "Ausführung",
            width: FieldWidth::fixed(1),
            rule: ValueRule::one_of(&["1", "2", "3", "4"]),
            default: "2",
            describe: Describe::table(AUSFUEHRUNG),
        },
        FieldSpec {
            name: "Luftführung",
            width: FieldWidth::fixed(1),
            rule: ValueRule::one_of(&["Z", "A"]),
            default: "Z",
            describe: Describe::table(&[
                ("Z", "Zuluft"),
                ("A", "Abluft (mit Luftführungselementen)"),
            ]),
        },
        FieldSpec {
            name: "Rahmenprofil",
            width: FieldWidth::with_literals(2, &["ELOX"]),
            rule: ValueRule::one_of(&["S0", "P0", "PB", "ELOX"]),
            default: "S0",
            describe: Describe::table(&[
                ("S0", "Schmales Profil, unsichtbar (Standard)"),
                ("P0", "Rahmenprofil P0, sichtbar"),
                ("PB", "Rahmenprofil PB, sichtbar"),
                ("ELOX", "Aluminium naturfarben eloxiert"),
            ]),
        },
        FieldSpec {
            name: "Rahmenoberfläche",
            width: FieldWidth::with_literals(4, &["ELOX"]),
            rule: ValueRule::one_of_or(&["ELOX"], Shape::Digits),
            default: "9005",
            describe: Describe::with_fallback(
                &[
                    ("ELOX", "Aluminium naturfarben eloxiert"),
                    ("9005", "RAL 9005 (schwarz, Standard)"),
                    ("9010", "RAL 9010 (weiß)"),
                ],
                Fallback::Ral { skip: 0 },
            ),
        },
        FieldSpec {
            name: "Lamellenfarbe",
            width: FieldWidth::fixed(5),
            rule: ValueRule::shaped(Shape::PrefixedDigits("L")),
            default: "L9005",
            describe: Describe::with_fallback(
                &[
                    ("L9005", "RAL 9005 (schwarz, Standard)"),
                    ("L9010", "RAL 9010 (weiß)"),
                ],
                Fallback::Ral { skip: 1 },
            ),
        },
        FieldSpec {
            name: "Lamellenstellung",
            width: FieldWidth::fixed(1),
            rule: ValueRule::one_of(&["V", "L", "R", "B"]),
            default: "B",
            describe: Describe::table(&[
                ("V", "Vertikal ausblasend"),
                ("L", "Horizontal einseitig links"),
                ("R", "Horizontal einseitig rechts"),
                ("B", "Horizontal beidseitig (Standard)"),
            ]),
        },
        FieldSpec {
            name: "Einzel-/Bandausführung",
            width: FieldWidth::fixed(1),
            rule: ValueRule::one_of(&["N", "B"]),
            default: "N",
            describe: Describe::table(EINZEL_BAND),
        },
        FieldSpec {
            name: "Länge",
            width: FieldWidth::fixed(5),
            rule: ValueRule::shaped(Shape::Digits),
            default: "01000",
            describe: Describe::with_fallback(&[], Fallback::Millimetres),
        },
        FieldSpec {
            name: "Montage",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["00", "VM", "KB"]),
            default: "VM",
            describe: Describe::table(&[
                ("00", "Ohne Verbindung"),
                ("VM", "Verdeckte Montage (Standard)"),
                ("KB", "Klemmbügel"),
            ]),
        },
        FieldSpec {
            name: "Endstück",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["E0", "ES", "EB", "EL", "ER"]),
            default: "E0",
            describe: Describe::table(&[
                ("E0", "Ohne Endstück (Standard)"),
                ("ES", "Mit Endstück (Paar)"),
                ("EB", "Beidseitig angebaut"),
                ("EL", "Links angebaut"),
                ("ER", "Rechts angebaut"),
            ]),
        },
        FieldSpec {
            name: "Befestigungswinkel/Blindstück",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["B0", "BW", "BS"]),
            default: "B0",
            describe: Describe::table(&[
                ("B0", "Ohne (Standard)"),
                ("BW", "Mit Befestigungswinkel"),
                ("BS", "Mit Blindstück"),
            ]),
        },
    ],
};
