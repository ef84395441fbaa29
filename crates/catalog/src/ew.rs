//! EW: Eckwinkel für Schlitzdurchlass.

use crate::{
    AUSFUEHRUNG, DURCHLASS, Describe, Fallback, FieldCatalog, FieldSpec, FieldWidth, Family, Shape,
    ValueRule,
};

const SCHENKEL: &[(&str, &str)] = &[("000", "Standardlänge 250 mm")];

/// Field catalog for `EW` codes (9 fields).
pub static EW: FieldCatalog = FieldCatalog {
    family: Family::Ew,
    example: "EW-21-2-S0-ELOX-B9005-090-000-000",
    fields: &[
        FieldSpec {
            name: "Typ",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["EW"]),
            default: "EW",
            describe: Describe::table(&[("EW", "Eckwinkel für Schlitzdurchlass")]),
        },
        FieldSpec {
            name: "Durchlass",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of_or(&["21"], Shape::Digits),
            default: "21",
            describe: Describe::table(DURCHLASS),
        },
        FieldSpec {
            name: "Ausführung",
            width: FieldWidth::fixed(1),
            rule: ValueRule::one_of(&["1", "2", "3", "4"]),
            default: "2",
            describe: Describe::table(AUSFUEHRUNG),
        },
        FieldSpec {
            name: "Rahmenprofil",
            width: FieldWidth::with_literals(2, &["ELOX"]),
            rule: ValueRule::one_of(&["S0", "P0", "PB", "ELOX"]),
            default: "S0",
            describe: Describe::table(&[
                ("S0", "Schmales Rahmenprofil (Standard)"),
                ("P0", "Rahmenprofil P0"),
                ("PB", "Rahmenprofil PB"),
                ("ELOX", "Aluminium naturfarben eloxiert"),
            ]),
        },
        FieldSpec {
            name: "Rahmenoberfläche",
            width: FieldWidth::with_literals(4, &["ELOX"]),
            rule: ValueRule::one_of_or(&["ELOX"], Shape::Digits),
            default: "ELOX",
            describe: Describe::with_fallback(
                &[
                    ("ELOX", "Aluminium naturfarben eloxiert (Standard)"),
                    ("9005", "RAL 9005 (schwarz)"),
                    ("9010", "RAL 9010 (weiß)"),
                ],
                Fallback::Ral { skip: 0 },
            ),
        },
        FieldSpec {
            name: "Farbe Blindprofil/Luftführungselemente",
            width: FieldWidth::fixed(5),
            rule: ValueRule::shaped(Shape::PrefixedDigits("B")),
            default: "B9005",
            describe: Describe::with_fallback(
                &[
                    ("B9005", "RAL 9005 schwarz (Standard)"),
                    ("B9010", "RAL 9010 weiß"),
                ],
                Fallback::Ral { skip: 1 },
            ),
        },
        FieldSpec {
            name: "Winkel zwischen den Schenkeln",
            width: FieldWidth::fixed(3),
            rule: ValueRule::shaped(Shape::Digits),
            default: "090",
            describe: Describe::with_fallback(
                &[("090", "90° (Standard)")],
                Fallback::Degrees { default: 90 },
            ),
        },
        FieldSpec {
            name: "Schenkellaenge links (a)",
            width: FieldWidth::fixed(3),
            rule: ValueRule::shaped(Shape::Digits),
            default: "000",
            describe: Describe::with_fallback(SCHENKEL, Fallback::Millimetres),
        },
        FieldSpec {
            name: "Schenkellaenge rechts (b)",
            width: FieldWidth::fixed(3),
            rule: ValueRule::shaped(Shape::Digits),
            default: "000",
            describe: Describe::with_fallback(SCHENKEL, Fallback::Millimetres),
        },
    ],
};
