//----------------------------------------
// Per-dataset lesson metadata
//----------------------------------------
use crate::dataset::histogram::HistogramBins;

/// Everything the lesson shows about a dataset besides its numbers: the
/// scenario text, the hypothesised-mean slider, the histogram axis and the
/// phrases used to build hypothesis and screen-reader sentences.
#[derive(Debug, PartialEq)]
pub struct DatasetProfile {
    pub label: &'static str,
    pub description: &'static str,
    pub min_hypothesised_mean: f64,
    pub max_hypothesised_mean: f64,
    pub default_hypothesised_mean: f64,
    pub mark_step: f64,
    pub bins: HistogramBins,
    pub axis_label: &'static str,
    /// "Histogram of <histogram_subject> with ..."
    pub histogram_subject: &'static str,
    /// "<mean_subject> is less than <mu><unit>"
    pub mean_subject: &'static str,
    /// Link word(s) between subject and value in the null hypothesis
    pub null_link: &'static str,
    pub unit: &'static str,
}

impl DatasetProfile {
    /// Labelled positions along the hypothesised-mean slider
    pub fn slider_marks(&self) -> Vec<f64> {
        let steps = ((self.max_hypothesised_mean - self.min_hypothesised_mean) / self.mark_step)
            .round() as usize;
        (0..=steps)
            .map(|i| self.min_hypothesised_mean + i as f64 * self.mark_step)
            .collect()
    }

    pub fn clamp_hypothesised_mean(&self, hypothesised_mean: f64) -> f64 {
        hypothesised_mean.clamp(self.min_hypothesised_mean, self.max_hypothesised_mean)
    }
}

pub static ANTACID: DatasetProfile = DatasetProfile {
    label: "Antacid",
    description: "A chemist working for a pharmaceutical company has developed a new antacid \
        tablet that they feel will relieve pain more quickly than the company's present \
        tablet. Experience indicates that the present tablet requires an average of 12 \
        minutes to take effect. The chemist records 15 times to relief with the new tablet. \
        Does the new tablet work more quickly than the present tablet?",
    min_hypothesised_mean: 3.0,
    max_hypothesised_mean: 17.0,
    default_hypothesised_mean: 12.0,
    mark_step: 1.0,
    bins: HistogramBins {
        start: 3.0,
        end: 17.0,
        size: 2.0,
    },
    axis_label: "Time to take effect (mins)",
    histogram_subject: "times for relief for new antacid tablet",
    mean_subject: "The actual mean time to relief for the new tablet",
    null_link: "is",
    unit: " minutes",
};

pub static GRADES: DatasetProfile = DatasetProfile {
    label: "Grades",
    description: "The grades of 30 students who took a test were recorded. The mean grade for \
        previous tests was 80. Is the mean grade for the observed 30 students the same or \
        different to the mean for previous tests?",
    min_hypothesised_mean: 75.0,
    max_hypothesised_mean: 100.0,
    default_hypothesised_mean: 80.0,
    mark_step: 5.0,
    bins: HistogramBins {
        start: 75.0,
        end: 100.0,
        size: 5.0,
    },
    axis_label: "Grade",
    histogram_subject: "the grades of 30 students",
    mean_subject: "The actual mean grade",
    null_link: "is equal to",
    unit: "",
};

pub static RDA: DatasetProfile = DatasetProfile {
    label: "RDA",
    description: "The Food and Nutrition Authority of the National Academy of Sciences states \
        that the Recommended Daily Amount (RDA) of iron for adult females under the age of 51 \
        should be 18 milligrams (mg). Iron intakes, in mg, were obtained for a randomly \
        selected group of 45 adult females under the age of 51, during a 24-hour period. Do \
        adult females get less than the RDA of 18mg of iron?",
    min_hypothesised_mean: 5.0,
    max_hypothesised_mean: 21.0,
    default_hypothesised_mean: 18.0,
    mark_step: 1.0,
    bins: HistogramBins {
        start: 5.0,
        end: 21.0,
        size: 2.0,
    },
    axis_label: "Daily iron intake (mg)",
    histogram_subject: "iron intake for 45 randomly selected females aged under 51",
    mean_subject: "The actual mean intake of iron",
    null_link: "is equal to",
    unit: " milligrams",
};

#[cfg(test)]
mod tests {

    use super::*;
    use crate::dataset::types::DatasetName;

    #[test]
    fn antacid_marks_every_integer() {
        let marks = ANTACID.slider_marks();
        assert_eq!(marks.len(), 15);
        assert_eq!(marks[0], 3.0);
        assert_eq!(marks[14], 17.0);
    }

    #[test]
    fn grades_marks_every_five() {
        assert_eq!(
            GRADES.slider_marks(),
            vec![75.0, 80.0, 85.0, 90.0, 95.0, 100.0]
        );
    }

    #[test]
    fn defaults_inside_slider() {
        for name in DatasetName::ALL {
            let profile = name.profile();
            assert_eq!(
                profile.clamp_hypothesised_mean(profile.default_hypothesised_mean),
                profile.default_hypothesised_mean
            );
        }
    }

    #[test]
    fn clamp_to_slider() {
        assert_eq!(RDA.clamp_hypothesised_mean(30.0), 21.0);
        assert_eq!(RDA.clamp_hypothesised_mean(-1.0), 5.0);
    }
}
