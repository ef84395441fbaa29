//! ASK: Anschlusskasten für Schlitzdurchlass.

use crate::{
    AUSFUEHRUNG, DURCHLASS, Describe, EINZEL_BAND, Fallback, FieldCatalog, FieldSpec, FieldWidth,
    Family, Shape, ValueRule,
};

/// Field catalog for `ASK` codes (15 fields).
pub static ASK: FieldCatalog = FieldCatalog {
    family: Family::Ask,
    example: "ASK-21-2-N-01000-VM-SV-DK2-GD1-I0-KHS-KVS-S1-SDS-E0",
    fields: &[
        FieldSpec {
            name: "Typ",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of(&["ASK"]),
            default: "ASK",
            describe: Describe::table(&[("ASK", "Anschlusskasten für Schlitzdurchlass")]),
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
            name: "Kastenmontage",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["00", "VM"]),
            default: "VM",
            describe: Describe::table(&[
                ("00", "Ohne Verbindung"),
                ("VM", "Verdeckte Montage (Standard)"),
            ]),
        },
        FieldSpec {
            name: "Material",
            width: FieldWidth::fixed(2),
            rule: ValueRule::ANY,
            default: "SV",
            describe: Describe::table(&[("SV", "Stahlblech verzinkt (Standard)")]),
        },
        FieldSpec {
            name: "Drosselklappe",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of(&["DK0", "DK2"]),
            default: "DK0",
            describe: Describe::table(&[
                ("DK0", "Ohne Drosselklappe (Standard)"),
                ("DK2", "Mit Drosselklappe und Seilzugverstellung"),
            ]),
        },
        FieldSpec {
            name: "Gummilippendichtung",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of(&["GD0", "GD1"]),
            default: "GD0",
            describe: Describe::table(&[
                ("GD0", "Ohne Gummilippendichtung (Standard)"),
                ("GD1", "Mit Gummilippendichtung"),
            ]),
        },
        FieldSpec {
            name: "Isolierung",
            width: FieldWidth::fixed(2),
            // Codes are upper-cased before decoding, so `Ii`/`Ia` arrive as `II`/`IA`.
            rule: ValueRule::one_of(&["I0", "II", "IA"]),
            default: "I0",
            describe: Describe::table(&[
                ("I0", "Ohne Isolierung (Standard)"),
                ("II", "Mit Isolierung innen"),
                ("IA", "Mit Isolierung außen"),
            ]),
        },
        FieldSpec {
            name: "Kastenhöhe",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of_or(&["KHS"], Shape::Digits),
            default: "KHS",
            describe: Describe::with_fallback(
                &[("KHS", "Kastenhöhe Standard")],
                Fallback::Template("{} mm"),
            ),
        },
        FieldSpec {
            name: "Kastenhals",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of_or(&["KVS"], Shape::Digits),
            default: "KVS",
            describe: Describe::with_fallback(
                &[("KVS", "Kastenhals Standard (45 mm)")],
                Fallback::Template("Kastenhalsverlängerung {} mm"),
            ),
        },
        FieldSpec {
            name: "Stutzenlage",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["S0", "S1", "S2"]),
            default: "S1",
            describe: Describe::table(&[
                ("S0", "Stutzen von oben"),
                ("S1", "Stutzen seitlich (Standard)"),
                ("S2", "Stutzen seitlich gegenüberliegend"),
            ]),
        },
        FieldSpec {
            name: "Stutzendurchmesser",
            width: FieldWidth::fixed(3),
            rule: ValueRule::one_of_or(&["SDS"], Shape::Digits),
            default: "SDS",
            describe: Describe::with_fallback(
                &[("SDS", "Stutzendurchmesser Standard")],
                Fallback::Template("{} mm"),
            ),
        },
        FieldSpec {
            name: "Abhängung",
            width: FieldWidth::fixed(2),
            rule: ValueRule::one_of(&["E0", "EM"]),
            default: "E0",
            describe: Describe::table(&[
                ("E0", "Ohne Einnietmutter (Standard)"),
                ("EM", "Mit Einnietmutter"),
            ]),
        },
    ],
};
