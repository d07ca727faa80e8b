//! Problem instances and solutions, in the plain-text and JSON forms.

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::search::{self, Mask, MAX_LEN};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Instance {
    pub numbers: Vec<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Solution {
    pub indices: Vec<usize>,
}

impl Instance {
    pub fn new(numbers: Vec<i64>) -> Result<Self> {
        ensure!(
            numbers.len() <= MAX_LEN,
            "{} values given, at most {MAX_LEN} are supported",
            numbers.len()
        );
        Ok(Instance { numbers })
    }

    /// Parses the whitespace-separated form: a count `n` followed by `n`
    /// integers. Anything after the `n`-th value is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let n: usize = match tokens.next() {
            Some(tok) => tok
                .parse()
                .with_context(|| format!("invalid element count `{tok}`"))?,
            None => bail!("input is empty, expected an element count"),
        };
        ensure!(n <= MAX_LEN, "{n} values declared, at most {MAX_LEN} are supported");

        let numbers = tokens
            .take(n)
            .map(|tok| {
                tok.parse::<i64>()
                    .with_context(|| format!("invalid value `{tok}`"))
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(
            numbers.len() == n,
            "expected {n} values, found {}",
            numbers.len()
        );
        Ok(Instance { numbers })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let instance: Instance = serde_json::from_str(text).context("malformed JSON instance")?;
        Instance::new(instance.numbers)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn solve(&self) -> Solution {
        search::solve(&self.numbers)
    }
}

impl Solution {
    pub fn from_mask(mask: Mask, n: usize) -> Self {
        Solution {
            indices: mask.indices(n).collect(),
        }
    }

    /// Output line: every index followed by a space, then a newline.
    pub fn to_line(&self) -> String {
        let mut line: String = self.indices.iter().map(|i| format!("{i} ")).collect();
        line.push('\n');
        line
    }

    /// Reads the indices on the first line of a solver's output.
    pub fn parse_line(text: &str) -> Result<Self> {
        let first = text.lines().next().unwrap_or_default();
        let indices = first
            .split_whitespace()
            .map(|tok| {
                tok.parse::<usize>()
                    .with_context(|| format!("invalid index `{tok}`"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Solution { indices })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_text() {
        let instance = Instance::parse("3\n1 2 3\n").unwrap();
        assert_eq!(instance.numbers, vec![1, 2, 3]);
        assert_eq!(Instance::parse("2 -4 7 99").unwrap().numbers, vec![-4, 7]);
        assert!(Instance::parse("0").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Instance::parse("").is_err());
        assert!(Instance::parse("x 1").is_err());
        assert!(Instance::parse("3 1 2").is_err());
        assert!(Instance::parse("2 1 two").is_err());
        assert!(Instance::parse("64").is_err());
    }

    #[test]
    fn json_instance() {
        let instance = Instance::from_json(r#"{"numbers": [4, -1, 9]}"#).unwrap();
        assert_eq!(instance.len(), 3);
        assert!(Instance::from_json(r#"{"values": []}"#).is_err());
        let too_long = format!("{{\"numbers\": {:?}}}", vec![0; 64]);
        assert!(Instance::from_json(&too_long).is_err());
    }

    #[test]
    fn line_has_trailing_space() {
        let solution = Solution { indices: vec![1, 3] };
        assert_eq!(solution.to_line(), "1 3 \n");
        assert_eq!(Solution::default().to_line(), "\n");
        assert_eq!(Solution::parse_line("1 3 \n").unwrap(), solution);
        assert_eq!(Solution::parse_line("").unwrap(), Solution::default());
        assert!(Solution::parse_line("1 -3").is_err());
    }

    #[test]
    fn json_solution() {
        let solution = Solution { indices: vec![2] };
        assert_eq!(solution.to_json().unwrap(), r#"{"indices":[2]}"#);
    }
}
