/// Class names for the pretrained animal model, in the exact index order the
/// model was trained with. The model's output vector is interpreted
/// position-for-position against this list, so reordering it silently
/// misclassifies.
pub const ANIMAL_LABELS: [&str; 90] = [
    "antelope",
    "badger",
    "bat",
    "bear",
    "bee",
    "beetle",
    "bison",
    "boar",
    "butterfly",
    "cat",
    "caterpillar",
    "chimpanzee",
    "cockroach",
    "cow",
    "coyote",
    "crab",
    "crow",
    "deer",
    "dog",
    "dolphin",
    "donkey",
    "dragonfly",
    "duck",
    "eagle",
    "elephant",
    "flamingo",
    "fly",
    "fox",
    "goat",
    "goldfish",
    "goose",
    "gorilla",
    "grasshopper",
    "hamster",
    "hare",
    "hedgehog",
    "hippopotamus",
    "hornbill",
    "horse",
    "hummingbird",
    "hyena",
    "jellyfish",
    "kangaroo",
    "koala",
    "ladybugs",
    "leopard",
    "lion",
    "lizard",
    "lobster",
    "mosquito",
    "moth",
    "mouse",
    "octopus",
    "okapi",
    "orangutan",
    "otter",
    "owl",
    "ox",
    "oyster",
    "panda",
    "parrot",
    "pelecaniformes",
    "penguin",
    "pig",
    "pigeon",
    "porcupine",
    "possum",
    "raccoon",
    "rat",
    "reindeer",
    "rhinoceros",
    "sandpiper",
    "seahorse",
    "seal",
    "shark",
    "sheep",
    "snake",
    "sparrow",
    "squid",
    "squirrel",
    "starfish",
    "swan",
    "tiger",
    "turkey",
    "turtle",
    "whale",
    "wolf",
    "wombat",
    "woodpecker",
    "zebra",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_count() {
        assert_eq!(ANIMAL_LABELS.len(), 90);
    }

    #[test]
    fn test_label_index_alignment() {
        assert_eq!(ANIMAL_LABELS[3], "bear");
        assert_eq!(ANIMAL_LABELS[9], "cat");
        assert_eq!(ANIMAL_LABELS[18], "dog");
        assert_eq!(ANIMAL_LABELS[89], "zebra");
    }

    #[test]
    fn test_labels_are_unique() {
        let unique: HashSet<&str> = ANIMAL_LABELS.iter().copied().collect();
        assert_eq!(unique.len(), ANIMAL_LABELS.len());
    }
}
