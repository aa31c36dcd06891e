use crate::prelude::*;

pub struct Answer;

pub type ElfName = String;
pub type SnackCalories = u64;

/// Each elf's snack calories, keyed by generated label.
///
/// Labels share one zero-padded width per parse, so lexicographic map order
/// equals file order and iteration is deterministic.
pub type Inventory = BTreeMap<ElfName, Vec<SnackCalories>>;

const MIN_NAME_WIDTH: usize = 2;

/// Label for the elf at 1-based `index`, zero-padded to `width`.
pub fn elf_name(index: usize, width: usize) -> ElfName {
    format!("elf-{index:0width$}")
}

/// Label width for `count` elves: `max(2, digits(count) + 1)`.
pub fn name_width(count: usize) -> usize {
    MIN_NAME_WIDTH.max(count.to_string().len() + 1)
}

/// Split `text` on the doubled `delimiter` into groups and parse every
/// token as a calorie count.
///
/// A token that is not a valid integer fails the whole parse; no group is
/// ever silently dropped. Surrounding blank lines are file cosmetics, so
/// the text is trimmed first, and blank text is an empty inventory.
pub fn parse_inventory(
    text: &str,
    delimiter: &str,
) -> Result<Inventory, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Inventory::new());
    }

    let group_separator = delimiter.repeat(2);
    let groups = text
        .split(group_separator.as_str())
        .map(|group| parse_snacks(group, delimiter))
        .collect::<Result<Vec<_>, _>>()?;

    let width = name_width(groups.len());
    Ok(groups
        .into_iter()
        .enumerate()
        .map(|(idx, snacks)| (elf_name(idx + 1, width), snacks))
        .collect())
}

fn parse_snacks(
    group: &str,
    delimiter: &str,
) -> Result<Vec<SnackCalories>, ParseError> {
    group
        .trim()
        .split(delimiter)
        .map(|token| {
            let token = token.trim();
            token
                .parse()
                .map_err(|source| ParseError::int(token, source))
        })
        .collect()
}

/// Label and summed calories of the elf carrying the most.
///
/// Ties keep the first group in label order.
pub fn highest_calories(
    inventory: &Inventory,
) -> Option<(&str, SnackCalories)> {
    inventory
        .iter()
        .map(|(name, snacks)| {
            (name.as_str(), snacks.iter().sum::<SnackCalories>())
        })
        .fold(None, |best, (name, total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((name, total)),
        })
}

/// Summed calories of the three best-stocked elves (all of them when the
/// inventory is smaller than three).
pub fn top_three_calories(inventory: &Inventory) -> SnackCalories {
    inventory
        .values()
        .map(|snacks| snacks.iter().sum::<SnackCalories>())
        .sorted_by(|a, b| b.cmp(a))
        .take(3)
        .sum()
}

/// Read and parse the inventory at `path`.
pub fn load_inventory<P: AsRef<Path>>(
    path: P,
    delimiter: &str,
) -> Result<Inventory> {
    let path = path.as_ref();
    let text = parse_string(file_reader(path)?)?;
    parse_inventory(&text, delimiter).with_context(|| {
        format!("invalid calorie inventory in {}", path.display())
    })
}

impl Solver for Answer {
    type Input = Inventory;
    type Output1 = String;
    type Output2 = SnackCalories;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        let inventory = parse_inventory(&parse_string(r)?, "\n")?;
        ensure!(!inventory.is_empty(), "input holds no calorie groups");
        Ok(inventory)
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let (name, total) = highest_calories(input)
            .expect("parse_input rejects empty inventories");
        format!("{name} ({total} calories)")
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        top_three_calories(input)
    }
}
