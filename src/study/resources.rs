// ============================================================
// Layer 5b — Resource Catalog
// ============================================================
// A fixed catalog of free learning resources per subject.
// Subjects are matched case-insensitively; anything unknown
// gets the general-purpose list.

use crate::domain::study::ResourceKind::{self, Article, Web, Youtube};
use crate::domain::study::Resource;

/// (title, url, kind, description)
type Entry = (&'static str, &'static str, ResourceKind, &'static str);

const CATALOG: &[(&str, &[Entry])] = &[
    ("aiml fundamentals", &[
        ("Machine Learning Crash Course", "https://developers.google.com/machine-learning/crash-course", Web, "Free Google ML course"),
        ("ML for Beginners", "https://www.youtube.com/watch?v=ukzFI9rgwfU", Youtube, "Beginner-friendly ML introduction"),
        ("Kaggle Learn", "https://www.kaggle.com/learn", Web, "Interactive ML tutorials"),
        ("Neural Networks Explained", "https://www.youtube.com/watch?v=aircAruvnKk", Youtube, "3Blue1Brown neural network series"),
    ]),
    ("python basics", &[
        ("Python.org Tutorial", "https://docs.python.org/3/tutorial/", Web, "Official Python tutorial"),
        ("Learn Python", "https://www.youtube.com/watch?v=_uQrJ0TkZlc", Youtube, "Python for beginners"),
        ("Codecademy Python", "https://www.codecademy.com/learn/learn-python-3", Web, "Interactive Python course"),
        ("Real Python", "https://realpython.com/", Article, "Python tutorials and articles"),
    ]),
    ("mathematics", &[
        ("Khan Academy Math", "https://www.khanacademy.org/math", Web, "Comprehensive math courses"),
        ("Math Explained", "https://www.youtube.com/watch?v=pTnEG_WGd2Q", Youtube, "Clear math explanations"),
        ("Wolfram MathWorld", "https://mathworld.wolfram.com/", Web, "Math reference"),
        ("Brilliant.org", "https://brilliant.org/courses/", Web, "Interactive math problems"),
    ]),
    ("physics", &[
        ("Physics Classroom", "https://www.physicsclassroom.com/", Web, "Physics tutorials"),
        ("Physics Videos", "https://www.youtube.com/user/minutephysics", Youtube, "MinutePhysics channel"),
        ("Khan Academy Physics", "https://www.khanacademy.org/science/physics", Web, "Free physics courses"),
        ("HyperPhysics", "http://hyperphysics.phy-astr.gsu.edu/", Web, "Physics concept maps"),
    ]),
    ("chemistry", &[
        ("Chemistry LibreTexts", "https://chem.libretexts.org/", Web, "Free chemistry textbooks"),
        ("Periodic Videos", "https://www.youtube.com/user/periodicvideos", Youtube, "Element videos"),
        ("Khan Academy Chemistry", "https://www.khanacademy.org/science/chemistry", Web, "Free chemistry courses"),
        ("ChemGuide", "https://www.chemguide.co.uk/", Web, "Chemistry study guides"),
    ]),
    ("biology", &[
        ("Biology LibreTexts", "https://bio.libretexts.org/", Web, "Free biology textbooks"),
        ("Crash Course Biology", "https://www.youtube.com/playlist?list=PL3EED4C1D684D3ADF", Youtube, "Engaging biology series"),
        ("Khan Academy Biology", "https://www.khanacademy.org/science/biology", Web, "Free biology courses"),
        ("Nature Education", "https://www.nature.com/scitable/", Article, "Science articles"),
    ]),
    ("science", &[
        ("Khan Academy Science", "https://www.khanacademy.org/science", Web, "Free science courses"),
        ("Kurzgesagt", "https://www.youtube.com/user/Kurzgesagt", Youtube, "Science animations"),
        ("Science Daily", "https://www.sciencedaily.com/", Article, "Science news"),
        ("NASA Education", "https://www.nasa.gov/stem", Web, "Space and science resources"),
    ]),
];

const DEFAULT_RESOURCES: &[Entry] = &[
    ("Khan Academy", "https://www.khanacademy.org/", Web, "Free courses on many subjects"),
    ("Coursera", "https://www.coursera.org/", Web, "University courses online"),
    ("edX", "https://www.edx.org/", Web, "Free online courses"),
    ("YouTube Edu", "https://www.youtube.com/education", Youtube, "Educational videos"),
];

fn to_resource(&(title, url, kind, description): &Entry) -> Resource {
    Resource {
        title:       title.to_string(),
        url:         url.to_string(),
        kind,
        description: description.to_string(),
    }
}

fn all_entries() -> impl Iterator<Item = &'static Entry> {
    CATALOG
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .chain(DEFAULT_RESOURCES.iter())
}

/// Resources for `subject`, or the general list when it is unknown
pub fn resources_for_subject(subject: &str) -> Vec<Resource> {
    let key = subject.trim().to_lowercase();
    let entries = CATALOG
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, entries)| *entries)
        .unwrap_or(DEFAULT_RESOURCES);

    entries.iter().map(to_resource).collect()
}

/// Every resource whose title or description contains `query`,
/// ignoring case. An empty query matches everything.
pub fn search_resources(query: &str) -> Vec<Resource> {
    let needle = query.to_lowercase();
    all_entries()
        .filter(|(title, _, _, description)| {
            title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
        })
        .map(to_resource)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_subject() {
        let rs = resources_for_subject("Chemistry");
        assert_eq!(rs.len(), 4);
        assert_eq!(rs[0].title, "Chemistry LibreTexts");
        assert_eq!(rs[1].kind, ResourceKind::Youtube);
    }

    #[test]
    fn test_unknown_subject_falls_back() {
        let rs = resources_for_subject("Medieval Poetry");
        assert_eq!(rs[0].title, "Khan Academy");
        assert_eq!(rs.len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_resources("KHAN ACADEMY");
        // math, physics, chemistry, biology, science and the general entry
        assert_eq!(hits.len(), 6);
        assert!(hits.iter().all(|r| r.title.starts_with("Khan Academy")));
    }

    #[test]
    fn test_search_matches_description() {
        let hits = search_resources("concept maps");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "HyperPhysics");
        assert!(search_resources("no such resource anywhere").is_empty());
    }
}
