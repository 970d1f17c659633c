use numerology_core::PersonName;
use proptest::prelude::*;
use proptest::sample::select;

/// Accented letters from Latin Extended-A, Extended-B and Extended
/// Additional, paired with their base letter.
const ACCENTED_LETTERS: &[(char, char)] = &[
    ('Ā', 'A'), ('ă', 'a'), ('Ą', 'A'), ('ć', 'c'), ('Č', 'C'), ('ď', 'd'),
    ('Đ', 'D'), ('ē', 'e'), ('Ě', 'E'), ('ğ', 'g'), ('Ħ', 'H'), ('ĩ', 'i'),
    ('İ', 'I'), ('ĵ', 'j'), ('ķ', 'k'), ('Ł', 'L'), ('ń', 'n'), ('Ň', 'N'),
    ('ő', 'o'), ('ŕ', 'r'), ('ś', 's'), ('Š', 'S'), ('ţ', 't'), ('Ŧ', 'T'),
    ('ũ', 'u'), ('Ů', 'U'), ('ŵ', 'w'), ('ŷ', 'y'), ('ź', 'z'), ('Ž', 'Z'),
    ('Ǎ', 'A'), ('ǐ', 'i'), ('Ǒ', 'O'), ('ǔ', 'u'), ('ǧ', 'g'), ('Ǹ', 'N'),
    ('ǰ', 'j'), ('ǫ', 'o'), ('ȁ', 'a'), ('Ȩ', 'E'), ('ȋ', 'i'), ('ȓ', 'r'),
    ('ȗ', 'u'), ('Ȟ', 'H'), ('ḃ', 'b'), ('Ḉ', 'C'), ('ḋ', 'd'), ('ḟ', 'f'),
    ('ḡ', 'g'), ('ḥ', 'h'), ('ḱ', 'k'), ('ḷ', 'l'), ('Ḿ', 'M'), ('ṕ', 'p'),
    ('ṛ', 'r'), ('ṩ', 's'), ('ẗ', 't'), ('Ṽ', 'V'), ('ẅ', 'w'), ('ẋ', 'x'),
    ('Ạ', 'A'), ('ễ', 'e'), ('ỹ', 'y'), ('ẓ', 'z'), ('Ø', 'O'), ('ø', 'o'),
];

fn letters_of(input: &str) -> Vec<char> {
    PersonName::parse(input).unwrap().letters().to_vec()
}

proptest! {
    #[test]
    fn accented_letters_fold_to_their_base_letter(
        pairs in prop::collection::vec(select(ACCENTED_LETTERS), 1..24),
    ) {
        let accented: String = pairs.iter().map(|(accented, _)| *accented).collect();
        let plain: String = pairs.iter().map(|(_, base)| *base).collect();
        prop_assert_eq!(letters_of(&accented), letters_of(&plain));
    }

    #[test]
    fn folded_letters_are_ascii_uppercase(name in "[A-Za-zÀ-ɏḀ-ỿ ]{1,40}") {
        if let Ok(parsed) = PersonName::parse(&name) {
            prop_assert!(parsed.letters().iter().all(char::is_ascii_uppercase));
        }
    }
}
